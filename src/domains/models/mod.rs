//! Classroom schema records.
//!
//! Plain data-transfer structs mirroring the Classroom v1 REST schemas. They
//! carry no invariants of their own: every field is optional, absent fields
//! are omitted on encode, and unknown fields are ignored on decode so a
//! newer API revision still decodes.
//!
//! Records are grouped by resource:
//! - `common`: shared building blocks (dates, Drive items, links, materials)
//! - `course`: courses, aliases, topics, gradebook settings
//! - `announcement` / `course_work` / `submission`: the stream items
//! - `roster`: students, teachers, profiles, invitations, guardians
//! - `registration`: push-notification registrations
//! - `lists`: paged list responses

/// Declares one or more schema records.
///
/// Each field is wrapped in `Option` and skipped when `None`; the struct is
/// serialized with camelCase keys and derives a JSON Schema so it can describe
/// a tool's input.
macro_rules! schema {
    ($(
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug,
                Clone,
                Default,
                PartialEq,
                ::serde::Serialize,
                ::serde::Deserialize,
                ::schemars::JsonSchema,
            )]
            #[serde(rename_all = "camelCase")]
            pub struct $name {
                $(
                    $(#[$field_meta])*
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $field: Option<$ty>,
                )*
            }
        )*
    };
}

pub mod announcement;
pub mod common;
pub mod course;
pub mod course_work;
pub mod lists;
pub mod registration;
pub mod roster;
pub mod submission;

pub use announcement::*;
pub use common::*;
pub use course::*;
pub use course_work::*;
pub use lists::*;
pub use registration::*;
pub use roster::*;
pub use submission::*;
