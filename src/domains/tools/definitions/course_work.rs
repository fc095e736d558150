//! Course work endpoints.

use super::{COURSE_ID, ORDER_BY, PAGE_SIZE, PAGE_TOKEN, UPDATE_MASK};
use crate::domains::models::{
    CourseWork, Empty, ListCourseWorkResponse, ModifyCourseWorkAssigneesRequest,
};
use crate::domains::tools::codec::SchemaCodec;
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param};

const ID: Param = Param::string("id", "Identifier of the course work.");

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/courseWork",
        description: "Returns a list of course work that the requester is permitted to view.",
        path_params: &[COURSE_ID],
        query_params: &[
            Param::array(
                "courseWorkStates",
                "Restriction on the work status to return: PUBLISHED, DRAFT, DELETED. Defaults to PUBLISHED.",
            ),
            ORDER_BY,
            PAGE_SIZE,
            PAGE_TOKEN,
        ],
        body: None,
        response: SchemaCodec::of::<ListCourseWorkResponse>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "courses/{courseId}/courseWork",
        description: "Creates course work: an assignment, short answer question or multiple choice question.",
        path_params: &[COURSE_ID],
        query_params: &[],
        body: Some(SchemaCodec::of::<CourseWork>()),
        response: SchemaCodec::of::<CourseWork>(),
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/courseWork/{id}",
        description: "Returns course work.",
        path_params: &[COURSE_ID, ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<CourseWork>(),
    },
    Endpoint {
        method: HttpMethod::Patch,
        path: "courses/{courseId}/courseWork/{id}",
        description: "Updates one or more fields of a course work. Valid update mask fields include title, description, state, dueDate, dueTime, maxPoints, scheduledTime, submissionModificationMode, topicId and gradingPeriodId.",
        path_params: &[COURSE_ID, ID],
        query_params: &[UPDATE_MASK],
        body: Some(SchemaCodec::of::<CourseWork>()),
        response: SchemaCodec::of::<CourseWork>(),
    },
    Endpoint {
        method: HttpMethod::Delete,
        path: "courses/{courseId}/courseWork/{id}",
        description: "Deletes a course work.",
        path_params: &[COURSE_ID, ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Empty>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "courses/{courseId}/courseWork/{id}:modifyAssignees",
        description: "Modifies assignee mode and options of a coursework.",
        path_params: &[COURSE_ID, ID],
        query_params: &[],
        body: Some(SchemaCodec::of::<ModifyCourseWorkAssigneesRequest>()),
        response: SchemaCodec::of::<CourseWork>(),
    },
];
