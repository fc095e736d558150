//! Push-notification registration endpoints.

use crate::domains::models::{Empty, Registration};
use crate::domains::tools::codec::SchemaCodec;
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param};

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: HttpMethod::Post,
        path: "registrations",
        description: "Creates a registration, causing notifications for the given feed to be published to the given Cloud Pub/Sub topic.",
        path_params: &[],
        query_params: &[],
        body: Some(SchemaCodec::of::<Registration>()),
        response: SchemaCodec::of::<Registration>(),
    },
    Endpoint {
        method: HttpMethod::Delete,
        path: "registrations/{registrationId}",
        description: "Deletes a registration, causing its notifications to stop being published.",
        path_params: &[Param::string(
            "registrationId",
            "Identifier of the registration to delete.",
        )],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Empty>(),
    },
];
