//! Course work material endpoints.

use super::{COURSE_ID, ORDER_BY, PAGE_SIZE, PAGE_TOKEN, UPDATE_MASK};
use crate::domains::models::{CourseWorkMaterial, Empty, ListCourseWorkMaterialResponse};
use crate::domains::tools::codec::SchemaCodec;
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param};

const ID: Param = Param::string("id", "Identifier of the course work material.");

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/courseWorkMaterials",
        description: "Returns a list of course work material that the requester is permitted to view.",
        path_params: &[COURSE_ID],
        query_params: &[
            Param::array(
                "courseWorkMaterialStates",
                "Restriction on the work status to return: PUBLISHED, DRAFT, DELETED. Defaults to PUBLISHED.",
            ),
            Param::string(
                "materialDriveId",
                "Optional filtering for course work material with at least one Drive material whose ID matches.",
            ),
            Param::string(
                "materialLink",
                "Optional filtering for course work material with at least one link material whose URL partially matches.",
            ),
            ORDER_BY,
            PAGE_SIZE,
            PAGE_TOKEN,
        ],
        body: None,
        response: SchemaCodec::of::<ListCourseWorkMaterialResponse>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "courses/{courseId}/courseWorkMaterials",
        description: "Creates a course work material.",
        path_params: &[COURSE_ID],
        query_params: &[],
        body: Some(SchemaCodec::of::<CourseWorkMaterial>()),
        response: SchemaCodec::of::<CourseWorkMaterial>(),
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/courseWorkMaterials/{id}",
        description: "Returns a course work material.",
        path_params: &[COURSE_ID, ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<CourseWorkMaterial>(),
    },
    Endpoint {
        method: HttpMethod::Patch,
        path: "courses/{courseId}/courseWorkMaterials/{id}",
        description: "Updates one or more fields of a course work material. Valid update mask fields include title, description, state, scheduledTime and topicId.",
        path_params: &[COURSE_ID, ID],
        query_params: &[UPDATE_MASK],
        body: Some(SchemaCodec::of::<CourseWorkMaterial>()),
        response: SchemaCodec::of::<CourseWorkMaterial>(),
    },
    Endpoint {
        method: HttpMethod::Delete,
        path: "courses/{courseId}/courseWorkMaterials/{id}",
        description: "Deletes a course work material.",
        path_params: &[COURSE_ID, ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Empty>(),
    },
];
