//! Topic endpoints.

use super::{COURSE_ID, PAGE_SIZE, PAGE_TOKEN, UPDATE_MASK};
use crate::domains::models::{Empty, ListTopicResponse, Topic};
use crate::domains::tools::codec::SchemaCodec;
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param};

const ID: Param = Param::string("id", "Identifier of the topic.");

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/topics",
        description: "Returns the list of topics that the requester is permitted to view.",
        path_params: &[COURSE_ID],
        query_params: &[PAGE_SIZE, PAGE_TOKEN],
        body: None,
        response: SchemaCodec::of::<ListTopicResponse>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "courses/{courseId}/topics",
        description: "Creates a topic.",
        path_params: &[COURSE_ID],
        query_params: &[],
        body: Some(SchemaCodec::of::<Topic>()),
        response: SchemaCodec::of::<Topic>(),
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/topics/{id}",
        description: "Returns a topic.",
        path_params: &[COURSE_ID, ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Topic>(),
    },
    Endpoint {
        method: HttpMethod::Patch,
        path: "courses/{courseId}/topics/{id}",
        description: "Updates one or more fields of a topic. Valid update mask fields: name.",
        path_params: &[COURSE_ID, ID],
        query_params: &[UPDATE_MASK],
        body: Some(SchemaCodec::of::<Topic>()),
        response: SchemaCodec::of::<Topic>(),
    },
    Endpoint {
        method: HttpMethod::Delete,
        path: "courses/{courseId}/topics/{id}",
        description: "Deletes a topic.",
        path_params: &[COURSE_ID, ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Empty>(),
    },
];
