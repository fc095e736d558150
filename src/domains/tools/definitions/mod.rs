//! The Classroom endpoint table.
//!
//! One file per resource family, each exporting a static slice of
//! [`Endpoint`]s. Adding an operation means adding an entry here; the registry,
//! router and HTTP transport pick it up without further changes.

use super::endpoint::{Endpoint, Param};

pub mod aliases;
pub mod announcements;
pub mod course_work;
pub mod course_work_materials;
pub mod courses;
pub mod invitations;
pub mod registrations;
pub mod student_submissions;
pub mod students;
pub mod teachers;
pub mod topics;
pub mod user_profiles;

pub(crate) const COURSE_ID: Param = Param::string(
    "courseId",
    "Identifier of the course. Either the Classroom-assigned identifier or an alias.",
);

pub(crate) const PAGE_SIZE: Param = Param::integer(
    "pageSize",
    "Maximum number of items to return. Zero or unspecified lets the server choose a maximum.",
);

pub(crate) const PAGE_TOKEN: Param = Param::string(
    "pageToken",
    "nextPageToken value returned from a previous list call, indicating that the subsequent page should be returned.",
);

pub(crate) const ORDER_BY: Param = Param::string(
    "orderBy",
    "Optional sort ordering for results: a comma-separated list of fields with an optional sort direction keyword, e.g. `updateTime desc`.",
);

pub(crate) const UPDATE_MASK: Param = Param::string(
    "updateMask",
    "Mask identifying which fields to update, as a comma-separated list of field names. Required for patch requests.",
);

/// Every endpoint, grouped by resource family.
pub fn all() -> impl Iterator<Item = &'static Endpoint> {
    [
        courses::ENDPOINTS,
        aliases::ENDPOINTS,
        announcements::ENDPOINTS,
        course_work::ENDPOINTS,
        student_submissions::ENDPOINTS,
        course_work_materials::ENDPOINTS,
        topics::ENDPOINTS,
        students::ENDPOINTS,
        teachers::ENDPOINTS,
        invitations::ENDPOINTS,
        registrations::ENDPOINTS,
        user_profiles::ENDPOINTS,
    ]
    .into_iter()
    .flatten()
}
