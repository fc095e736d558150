//! Teacher roster endpoints.

use super::{COURSE_ID, PAGE_SIZE, PAGE_TOKEN};
use crate::domains::models::{Empty, ListTeachersResponse, Teacher};
use crate::domains::tools::codec::SchemaCodec;
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param};

const USER_ID: Param = Param::string(
    "userId",
    "Identifier of the teacher: a numeric id, an email address, or `me`.",
);

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/teachers",
        description: "Returns a list of teachers of this course that the requester is permitted to view.",
        path_params: &[COURSE_ID],
        query_params: &[PAGE_SIZE, PAGE_TOKEN],
        body: None,
        response: SchemaCodec::of::<ListTeachersResponse>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "courses/{courseId}/teachers",
        description: "Creates a teacher of a course. Domain administrators may add users directly.",
        path_params: &[COURSE_ID],
        query_params: &[],
        body: Some(SchemaCodec::of::<Teacher>()),
        response: SchemaCodec::of::<Teacher>(),
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/teachers/{userId}",
        description: "Returns a teacher of a course.",
        path_params: &[COURSE_ID, USER_ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Teacher>(),
    },
    Endpoint {
        method: HttpMethod::Delete,
        path: "courses/{courseId}/teachers/{userId}",
        description: "Removes the specified teacher from the specified course. The primary teacher cannot be removed.",
        path_params: &[COURSE_ID, USER_ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Empty>(),
    },
];
