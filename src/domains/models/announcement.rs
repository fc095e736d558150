//! Announcements posted to a course stream.

use super::{IndividualStudentsOptions, Material, ModifyIndividualStudentsOptions};

schema! {
    /// Announcement created by a teacher for students of the course.
    pub struct Announcement {
        /// Identifier of the course. Read-only.
        course_id: String,
        /// Classroom-assigned identifier of this announcement, unique per course. Read-only.
        id: String,
        /// Description of this announcement, at most 30,000 characters.
        text: String,
        /// Additional materials. Announcements must have no more than 20 material items.
        materials: Vec<Material>,
        /// Status of this announcement. If unspecified, the default state is `DRAFT`.
        state: String,
        /// Absolute link to this announcement in the Classroom web UI. Read-only.
        alternate_link: String,
        /// Timestamp when this announcement was created. Read-only.
        creation_time: String,
        /// Timestamp of the most recent change to this announcement. Read-only.
        update_time: String,
        /// Optional timestamp when this announcement is scheduled to be published.
        scheduled_time: String,
        /// Assignee mode of the announcement. If unspecified, the default value is `ALL_STUDENTS`.
        assignee_mode: String,
        /// Identifiers of students with access to the announcement.
        individual_students_options: IndividualStudentsOptions,
        /// Identifier for the user that created the announcement. Read-only.
        creator_user_id: String,
    }

    /// Request to modify assignee mode and options of an announcement.
    pub struct ModifyAnnouncementAssigneesRequest {
        /// Mode of the announcement describing whether it is accessible by all
        /// students or specified individual students.
        assignee_mode: String,
        /// Set which students can view or cannot view the announcement.
        ///
        /// Must be specified only when `assigneeMode` is `INDIVIDUAL_STUDENTS`.
        modify_individual_students_options: ModifyIndividualStudentsOptions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::models::{DriveFile, SharedDriveFile};

    #[test]
    fn test_announcement_round_trip() {
        let original = Announcement {
            course_id: Some("123".to_string()),
            id: Some("789".to_string()),
            text: Some("Field trip on Friday".to_string()),
            materials: Some(vec![Material {
                drive_file: Some(SharedDriveFile {
                    drive_file: Some(DriveFile {
                        id: Some("file-p".to_string()),
                        title: Some("Permission slip".to_string()),
                        alternate_link: Some("https://drive.example/file-p".to_string()),
                        thumbnail_url: Some("https://drive.example/file-p.png".to_string()),
                    }),
                    share_mode: Some("STUDENT_COPY".to_string()),
                }),
                ..Default::default()
            }]),
            state: Some("PUBLISHED".to_string()),
            alternate_link: Some("https://classroom.example/c/123/p/789".to_string()),
            creation_time: Some("2024-09-03T10:00:00.000Z".to_string()),
            update_time: Some("2024-09-03T10:05:00.000Z".to_string()),
            scheduled_time: Some("2024-09-04T07:00:00Z".to_string()),
            assignee_mode: Some("INDIVIDUAL_STUDENTS".to_string()),
            individual_students_options: Some(IndividualStudentsOptions {
                student_ids: Some(vec!["s1".to_string(), "s3".to_string()]),
            }),
            creator_user_id: Some("t1".to_string()),
        };

        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: Announcement = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);

        let json: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(json["individualStudentsOptions"]["studentIds"][1], "s3");
        assert_eq!(json["materials"][0]["driveFile"]["shareMode"], "STUDENT_COPY");
    }

    #[test]
    fn test_modify_assignees_wire_names() {
        let request = ModifyAnnouncementAssigneesRequest {
            assignee_mode: Some("INDIVIDUAL_STUDENTS".to_string()),
            modify_individual_students_options: Some(ModifyIndividualStudentsOptions {
                add_student_ids: Some(vec!["s4".to_string()]),
                remove_student_ids: None,
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "assigneeMode": "INDIVIDUAL_STUDENTS",
                "modifyIndividualStudentsOptions": { "addStudentIds": ["s4"] }
            })
        );
    }
}
