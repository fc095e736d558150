//! Announcement endpoints.

use super::{COURSE_ID, ORDER_BY, PAGE_SIZE, PAGE_TOKEN, UPDATE_MASK};
use crate::domains::models::{
    Announcement, Empty, ListAnnouncementsResponse, ModifyAnnouncementAssigneesRequest,
};
use crate::domains::tools::codec::SchemaCodec;
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param};

const ID: Param = Param::string("id", "Identifier of the announcement.");

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/announcements",
        description: "Returns a list of announcements that the requester is permitted to view.",
        path_params: &[COURSE_ID],
        query_params: &[
            Param::array(
                "announcementStates",
                "Restriction on the state of announcements returned: PUBLISHED, DRAFT, DELETED. Defaults to PUBLISHED.",
            ),
            ORDER_BY,
            PAGE_SIZE,
            PAGE_TOKEN,
        ],
        body: None,
        response: SchemaCodec::of::<ListAnnouncementsResponse>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "courses/{courseId}/announcements",
        description: "Creates an announcement in a course.",
        path_params: &[COURSE_ID],
        query_params: &[],
        body: Some(SchemaCodec::of::<Announcement>()),
        response: SchemaCodec::of::<Announcement>(),
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/announcements/{id}",
        description: "Returns an announcement.",
        path_params: &[COURSE_ID, ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Announcement>(),
    },
    Endpoint {
        method: HttpMethod::Patch,
        path: "courses/{courseId}/announcements/{id}",
        description: "Updates one or more fields of an announcement. Valid update mask fields: text, state, scheduledTime.",
        path_params: &[COURSE_ID, ID],
        query_params: &[UPDATE_MASK],
        body: Some(SchemaCodec::of::<Announcement>()),
        response: SchemaCodec::of::<Announcement>(),
    },
    Endpoint {
        method: HttpMethod::Delete,
        path: "courses/{courseId}/announcements/{id}",
        description: "Deletes an announcement.",
        path_params: &[COURSE_ID, ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Empty>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "courses/{courseId}/announcements/{id}:modifyAssignees",
        description: "Modifies assignee mode and options of an announcement.",
        path_params: &[COURSE_ID, ID],
        query_params: &[],
        body: Some(SchemaCodec::of::<ModifyAnnouncementAssigneesRequest>()),
        response: SchemaCodec::of::<Announcement>(),
    },
];
