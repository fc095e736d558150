//! Student submission endpoints.
//!
//! Submissions live under one course work item. Besides plain get/list/patch
//! they expose the custom verbs `turnIn`, `reclaim`, `return` and
//! `modifyAttachments`, which change the submission's state.

use super::{COURSE_ID, PAGE_SIZE, PAGE_TOKEN, UPDATE_MASK};
use crate::domains::models::{
    Empty, ListStudentSubmissionsResponse, ModifyAttachmentsRequest,
    ReclaimStudentSubmissionRequest, ReturnStudentSubmissionRequest, StudentSubmission,
    TurnInStudentSubmissionRequest,
};
use crate::domains::tools::codec::SchemaCodec;
use crate::domains::tools::endpoint::{Endpoint, HttpMethod, Param};

const COURSE_WORK_ID: Param = Param::string(
    "courseWorkId",
    "Identifier of the course work. Use `-` to list submissions across all course work of the course.",
);

const ID: Param = Param::string("id", "Identifier of the student submission.");

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/courseWork/{courseWorkId}/studentSubmissions",
        description: "Returns a list of student submissions that the requester is permitted to view.",
        path_params: &[COURSE_ID, COURSE_WORK_ID],
        query_params: &[
            Param::string(
                "late",
                "Requested lateness value: LATE_ONLY or NOT_LATE_ONLY. Unspecified returns all submissions.",
            ),
            PAGE_SIZE,
            PAGE_TOKEN,
            Param::array(
                "states",
                "Requested submission states: NEW, CREATED, TURNED_IN, RETURNED, RECLAIMED_BY_STUDENT.",
            ),
            Param::string(
                "userId",
                "Optional argument to restrict returned submissions to those owned by the student with the specified identifier.",
            ),
        ],
        body: None,
        response: SchemaCodec::of::<ListStudentSubmissionsResponse>(),
    },
    Endpoint {
        method: HttpMethod::Get,
        path: "courses/{courseId}/courseWork/{courseWorkId}/studentSubmissions/{id}",
        description: "Returns a student submission.",
        path_params: &[COURSE_ID, COURSE_WORK_ID, ID],
        query_params: &[],
        body: None,
        response: SchemaCodec::of::<StudentSubmission>(),
    },
    Endpoint {
        method: HttpMethod::Patch,
        path: "courses/{courseId}/courseWork/{courseWorkId}/studentSubmissions/{id}",
        description: "Updates one or more fields of a student submission. Valid update mask fields: draftGrade, assignedGrade.",
        path_params: &[COURSE_ID, COURSE_WORK_ID, ID],
        query_params: &[UPDATE_MASK],
        body: Some(SchemaCodec::of::<StudentSubmission>()),
        response: SchemaCodec::of::<StudentSubmission>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "courses/{courseId}/courseWork/{courseWorkId}/studentSubmissions/{id}:turnIn",
        description: "Turns in a student submission, transferring ownership of attached Drive files to the teacher.",
        path_params: &[COURSE_ID, COURSE_WORK_ID, ID],
        query_params: &[],
        body: Some(SchemaCodec::of::<TurnInStudentSubmissionRequest>()),
        response: SchemaCodec::of::<Empty>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "courses/{courseId}/courseWork/{courseWorkId}/studentSubmissions/{id}:reclaim",
        description: "Reclaims a student submission on behalf of the student that owns it, returning it to an unsubmitted state.",
        path_params: &[COURSE_ID, COURSE_WORK_ID, ID],
        query_params: &[],
        body: Some(SchemaCodec::of::<ReclaimStudentSubmissionRequest>()),
        response: SchemaCodec::of::<Empty>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "courses/{courseId}/courseWork/{courseWorkId}/studentSubmissions/{id}:return",
        description: "Returns a student submission, setting its assigned grade to the draft grade.",
        path_params: &[COURSE_ID, COURSE_WORK_ID, ID],
        query_params: &[],
        body: Some(SchemaCodec::of::<ReturnStudentSubmissionRequest>()),
        response: SchemaCodec::of::<Empty>(),
    },
    Endpoint {
        method: HttpMethod::Post,
        path: "courses/{courseId}/courseWork/{courseWorkId}/studentSubmissions/{id}:modifyAttachments",
        description: "Modifies attachments of a student submission. Attachments may only be added to submissions of assignment-type course work.",
        path_params: &[COURSE_ID, COURSE_WORK_ID, ID],
        query_params: &[],
        body: Some(SchemaCodec::of::<ModifyAttachmentsRequest>()),
        response: SchemaCodec::of::<StudentSubmission>(),
    },
];
