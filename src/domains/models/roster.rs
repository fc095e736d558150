//! People attached to courses: students, teachers, guardians, and invitations.

use super::DriveFolder;

schema! {
    /// Student in a course.
    pub struct Student {
        /// Identifier of the course. Read-only.
        course_id: String,
        /// Identifier of the user: numeric identifier, email address, or `"me"`.
        user_id: String,
        /// Global user information for the student. Read-only.
        profile: UserProfile,
        /// Information about a Drive folder for this student's work in this course. Read-only.
        student_work_folder: DriveFolder,
    }

    /// Teacher of a course.
    pub struct Teacher {
        /// Identifier of the course. Read-only.
        course_id: String,
        /// Identifier of the user: numeric identifier, email address, or `"me"`.
        user_id: String,
        /// Global user information for the teacher. Read-only.
        profile: UserProfile,
    }

    /// Global information for a user.
    pub struct UserProfile {
        /// Identifier of the user. Read-only.
        id: String,
        /// Name of the user. Read-only.
        name: Name,
        /// Email address of the user. Read-only.
        email_address: String,
        /// URL of user's profile photo. Read-only.
        photo_url: String,
        /// Global permissions of the user. Read-only.
        permissions: Vec<GlobalPermission>,
        /// Whether the user's domain administrator has explicitly verified them as a teacher. Read-only.
        verified_teacher: bool,
    }

    /// Details of the user's name.
    pub struct Name {
        /// The user's first name. Read-only.
        given_name: String,
        /// The user's last name. Read-only.
        family_name: String,
        /// The user's full name formed by concatenating the first and last name values. Read-only.
        full_name: String,
    }

    /// Global user permission description.
    pub struct GlobalPermission {
        /// Permission value.
        permission: String,
    }

    /// An invitation to join a course.
    pub struct Invitation {
        /// Identifier assigned by Classroom. Read-only.
        id: String,
        /// Identifier of the invited user: numeric identifier or email address.
        user_id: String,
        /// Identifier of the course to invite the user to.
        course_id: String,
        /// Role to invite the user to have. Must not be `COURSE_ROLE_UNSPECIFIED`.
        role: String,
    }

    /// Association between a student and a guardian of that student.
    pub struct Guardian {
        /// Identifier for the student to whom the guardian relationship applies.
        student_id: String,
        /// Identifier for the guardian.
        guardian_id: String,
        /// User profile for the guardian.
        guardian_profile: UserProfile,
        /// The email address to which the initial guardian invitation was sent.
        invited_email_address: String,
    }

    /// An invitation to become the guardian of a specified user.
    pub struct GuardianInvitation {
        /// ID of the student (in standard format).
        student_id: String,
        /// Unique identifier for this invitation. Read-only.
        invitation_id: String,
        /// Email address that the invitation was sent to.
        invited_email_address: String,
        /// The state that this invitation is in.
        state: String,
        /// The time that this invitation was created. Read-only.
        creation_time: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guardian_invitation_round_trip() {
        let original = GuardianInvitation {
            student_id: Some("s1".to_string()),
            invitation_id: Some("inv-42".to_string()),
            invited_email_address: Some("parent@example.com".to_string()),
            state: Some("PENDING".to_string()),
            creation_time: Some("2024-09-05T18:30:00.000Z".to_string()),
        };

        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: GuardianInvitation = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);

        let json: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(json["invitedEmailAddress"], "parent@example.com");
        assert_eq!(json["invitationId"], "inv-42");
    }
}
