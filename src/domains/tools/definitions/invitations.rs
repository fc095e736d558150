//! Course invitation endpoints.

use super::{PAGE_SIZE, PAGE_TOKEN};
use crate::domains::models::{Empty, Invitation, ListInvitationsResponse};
use crate::domains::tools::codec::SchemaCodec;
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param};

const ID: Param = Param::string("id", "Identifier of the invitation.");

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: HttpMethod::Get,
        path: "invitations",
        description: "Returns a list of invitations that the requesting user is permitted to view. Either userId or courseId must be supplied.",
        path_params: &[],
        query_params: &[
            Param::string(
                "courseId",
                "Restricts returned invitations to those for a course with the specified identifier.",
            ),
            PAGE_SIZE,
            PAGE_TOKEN,
            Param::string(
                "userId",
                "Restricts returned invitations to those for a specific user: a numeric id, an email address, or `me`.",
            ),
        ],
        body: None,
        response: SchemaCodec::of::<ListInvitationsResponse>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "invitations",
        description: "Creates an invitation. Only one invitation for a user and course may exist at a time.",
        path_params: &[],
        query_params: &[],
        body: Some(SchemaCodec::of::<Invitation>()),
        response: SchemaCodec::of::<Invitation>(),
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "invitations/{id}",
        description: "Returns an invitation.",
        path_params: &[ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Invitation>(),
    },
    Endpoint {
        method: HttpMethod::Delete,
        path: "invitations/{id}",
        description: "Deletes an invitation.",
        path_params: &[ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Empty>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "invitations/{id}:accept",
        description: "Accepts an invitation, removing it and adding the invited user to the teachers or students of the invited course.",
        path_params: &[ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Empty>(),
    },
];
