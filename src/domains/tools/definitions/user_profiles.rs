//! User profile, guardian and guardian invitation endpoints.

use super::{PAGE_SIZE, PAGE_TOKEN, UPDATE_MASK};
use crate::domains::models::{
    Empty, Guardian, GuardianInvitation, ListGuardianInvitationsResponse, ListGuardiansResponse,
    UserProfile,
};
use crate::domains::tools::codec::SchemaCodec;
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param};

const STUDENT_ID: Param = Param::string(
    "studentId",
    "Identifier of the student: a numeric id, an email address, or `me`. Use `-` on list calls to cover every student the requester may view.",
);

const GUARDIAN_ID: Param = Param::string("guardianId", "Identifier of the guardian.");

const INVITATION_ID: Param = Param::string("invitationId", "Identifier of the guardian invitation.");

const INVITED_EMAIL: Param = Param::string(
    "invitedEmailAddress",
    "Restricts results to those whose invited email address matches.",
);

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: HttpMethod::Get,
        path: "userProfiles/{userId}",
        description: "Returns a user profile.",
        path_params: &[Param::string(
            "userId",
            "Identifier of the profile to return: a numeric id, an email address, or `me`.",
        )],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<UserProfile>(),
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "userProfiles/{studentId}/guardians",
        description: "Returns a list of guardians that the requesting user is permitted to view.",
        path_params: &[STUDENT_ID],
        query_params: &[INVITED_EMAIL, PAGE_SIZE, PAGE_TOKEN],
        body: None,
        response: SchemaCodec::of::<ListGuardiansResponse>(),
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "userProfiles/{studentId}/guardians/{guardianId}",
        description: "Returns a specific guardian.",
        path_params: &[STUDENT_ID, GUARDIAN_ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Guardian>(),
    },
    Endpoint {
        method: HttpMethod::Delete,
        path: "userProfiles/{studentId}/guardians/{guardianId}",
        description: "Deletes a guardian. The guardian stops receiving guardian notifications.",
        path_params: &[STUDENT_ID, GUARDIAN_ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<Empty>(),
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "userProfiles/{studentId}/guardianInvitations",
        description: "Returns a list of guardian invitations that the requesting user is permitted to view.",
        path_params: &[STUDENT_ID],
        query_params: &[
            INVITED_EMAIL,
            PAGE_SIZE,
            PAGE_TOKEN,
            Param::array(
                "states",
                "Restricts returned invitations to those in the given states: PENDING, COMPLETE.",
            ),
        ],
        body: None,
        response: SchemaCodec::of::<ListGuardianInvitationsResponse>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "userProfiles/{studentId}/guardianInvitations",
        description: "Creates a guardian invitation and sends an email to the guardian asking them to confirm.",
        path_params: &[STUDENT_ID],
        query_params: &[],
        body: Some(SchemaCodec::of::<GuardianInvitation>()),
        response: SchemaCodec::of::<GuardianInvitation>(),
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "userProfiles/{studentId}/guardianInvitations/{invitationId}",
        description: "Returns a specific guardian invitation.",
        path_params: &[STUDENT_ID, INVITATION_ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<GuardianInvitation>(),
    },
    Endpoint {
        method: HttpMethod::Patch,
        path: "userProfiles/{studentId}/guardianInvitations/{invitationId}",
        description: "Modifies a guardian invitation. Only setting state from PENDING to COMPLETE is supported; valid update mask fields: state.",
        path_params: &[STUDENT_ID, INVITATION_ID],
        query_params: &[UPDATE_MASK],
        body: Some(SchemaCodec::of::<GuardianInvitation>()),
        response: SchemaCodec::of::<GuardianInvitation>(),
    },
];
