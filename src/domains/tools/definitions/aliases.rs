//! Course alias endpoints.

use super::{COURSE_ID, PAGE_SIZE, PAGE_TOKEN};
use crate::domains::models::{CourseAlias, Empty, ListCourseAliasesResponse};
use crate::domains::tools::codec::SchemaCodec;
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/aliases",
        description: "Returns a list of aliases for a course.",
        path_params: &[COURSE_ID],
        query_params: &[PAGE_SIZE, PAGE_TOKEN],
        body: None,
        response: SchemaCodec::of::<ListCourseAliasesResponse>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "courses/{courseId}/aliases",
        description: "Creates an alias for a course. Domain-scoped aliases start with `d:`, project-scoped aliases with `p:`.",
        path_params: &[COURSE_ID],
        query_params: &[],
        body: Some(SchemaCodec::of::<CourseAlias>()),
        response: SchemaCodec::of::<CourseAlias>(),
    },
    Endpoint {
        method: HttpMethod::Delete,
        path: "courses/{courseId}/aliases/{alias}",
        description: "Deletes an alias of a course.",
        path_params: &[
            COURSE_ID,
            Param::string("alias", "Alias to delete. This may not be the Classroom-assigned identifier."),
        ],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Empty>(),
    },
];
