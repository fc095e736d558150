//! Course endpoints.

use super::{PAGE_SIZE, PAGE_TOKEN, UPDATE_MASK};
use crate::domains::models::{Course, Empty, ListCoursesResponse};
use crate::domains::tools::codec::SchemaCodec;
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param};

const ID: Param = Param::string(
    "id",
    "Identifier of the course. Either the Classroom-assigned identifier or an alias.",
);

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: HttpMethod::Get,
        path: "courses",
        description: "Returns a list of courses that the requesting user is permitted to view, restricted to those that match the request.",
        path_params: &[],
        query_params: &[
            Param::array(
                "courseStates",
                "Restricts returned courses to those in one of the specified states: ACTIVE, ARCHIVED, PROVISIONED, DECLINED, SUSPENDED.",
            ),
            PAGE_SIZE,
            PAGE_TOKEN,
            Param::string(
                "studentId",
                "Restricts returned courses to those having a student with the specified identifier: a numeric id, an email address, or `me`.",
            ),
            Param::string(
                "teacherId",
                "Restricts returned courses to those having a teacher with the specified identifier: a numeric id, an email address, or `me`.",
            ),
        ],
        body: None,
        response: SchemaCodec::of::<ListCoursesResponse>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "courses",
        description: "Creates a course. The user specified in ownerId is the owner of the created course and is added as a teacher.",
        path_params: &[],
        query_params: &[],
        body: Some(SchemaCodec::of::<Course>()),
        response: SchemaCodec::of::<Course>(),
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{id}",
        description: "Returns a course.",
        path_params: &[ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Course>(),
    },
    Endpoint {
        method: HttpMethod::Put,
        path: "courses/{id}",
        description: "Updates a course, replacing every writable field.",
        path_params: &[ID],
        query_params: &[],
        body: Some(SchemaCodec::of::<Course>()),
        response: SchemaCodec::of::<Course>(),
    },
    Endpoint {
        method: HttpMethod::Patch,
        path: "courses/{id}",
        description: "Updates one or more fields in a course. Valid update mask fields: name, section, descriptionHeading, description, room, courseState, ownerId.",
        path_params: &[ID],
        query_params: &[UPDATE_MASK],
        body: Some(SchemaCodec::of::<Course>()),
        response: SchemaCodec::of::<Course>(),
    },
    Endpoint {
        method: HttpMethod::Delete,
        path: "courses/{id}",
        description: "Deletes a course.",
        path_params: &[ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Empty>(),
    },
];
