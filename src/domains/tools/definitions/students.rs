//! Student roster endpoints.

use super::{COURSE_ID, PAGE_SIZE, PAGE_TOKEN};
use crate::domains::models::{Empty, ListStudentsResponse, Student};
use crate::domains::tools::codec::SchemaCodec;
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param};

const USER_ID: Param = Param::string(
    "userId",
    "Identifier of the student: a numeric id, an email address, or `me`.",
);

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/students",
        description: "Returns a list of students of this course that the requester is permitted to view.",
        path_params: &[COURSE_ID],
        query_params: &[PAGE_SIZE, PAGE_TOKEN],
        body: None,
        response: SchemaCodec::of::<ListStudentsResponse>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "courses/{courseId}/students",
        description: "Adds a user as a student of a course. Domain administrators may add users directly; users may add themselves with an enrollment code.",
        path_params: &[COURSE_ID],
        query_params: &[Param::string(
            "enrollmentCode",
            "Enrollment code of the course to create the student in. Required if userId corresponds to the requesting user.",
        )],
        body: Some(SchemaCodec::of::<Student>()),
        response: SchemaCodec::of::<Student>(),
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/students/{userId}",
        description: "Returns a student of a course.",
        path_params: &[COURSE_ID, USER_ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Student>(),
    },
    Endpoint {
        method: HttpMethod::Delete,
        path: "courses/{courseId}/students/{userId}",
        description: "Deletes a student of a course.",
        path_params: &[COURSE_ID, USER_ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Empty>(),
    },
];
