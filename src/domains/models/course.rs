//! Courses and the records that hang directly off a course.

use super::{CourseMaterial, DriveFolder};

schema! {
    /// A Google Classroom course.
    pub struct Course {
        /// Identifier for this course assigned by Classroom.
        ///
        /// When creating a course this may be set to an alias string to map
        /// the new course to an alias.
        id: String,
        /// Name of the course, for example "10th Grade Biology".
        name: String,
        /// Section of the course, for example "Period 2".
        section: String,
        /// Optional heading for the description, for example "Welcome to 10th Grade Biology."
        description_heading: String,
        /// Optional description, for example "We'll be learning about the structure of living creatures".
        description: String,
        /// Optional room location, for example "301".
        room: String,
        /// The identifier of the owner of a course.
        ///
        /// May be the numeric identifier, the email address, or `"me"`.
        owner_id: String,
        /// Creation time of the course. Read-only.
        creation_time: String,
        /// Time of the most recent update to this course. Read-only.
        update_time: String,
        /// Enrollment code to use when joining this course. Read-only.
        enrollment_code: String,
        /// State of the course. If unspecified, the default state is `PROVISIONED`.
        course_state: String,
        /// Absolute link to this course in the Classroom web UI. Read-only.
        alternate_link: String,
        /// The email address of a Google group containing all teachers of the course. Read-only.
        teacher_group_email: String,
        /// The email address of a Google group containing all members of the course. Read-only.
        course_group_email: String,
        /// Information about a Drive folder that is shared with all teachers of the course. Read-only.
        teacher_folder: DriveFolder,
        /// Sets of materials that appear on the "about" page of this course. Read-only.
        course_material_sets: Vec<CourseMaterialSet>,
        /// Whether or not guardian notifications are enabled for this course. Read-only.
        guardians_enabled: bool,
        /// The Calendar ID for a calendar that all course members can see. Read-only.
        calendar_id: String,
        /// The gradebook settings that specify how a student's overall grade is calculated.
        gradebook_settings: GradebookSettings,
    }

    /// Alternative identifier for a course.
    ///
    /// Domain-scoped aliases start with `d:`, project-scoped aliases with `p:`.
    pub struct CourseAlias {
        /// Alias string, for example `d:math_101`.
        alias: String,
    }

    /// A set of materials that appears on the "About" page of the course.
    pub struct CourseMaterialSet {
        /// Title for this set.
        title: String,
        /// Materials attached to this set.
        materials: Vec<CourseMaterial>,
    }

    /// The gradebook settings for a course.
    pub struct GradebookSettings {
        /// Indicates how the overall grade is calculated.
        calculation_type: String,
        /// Indicates who can see the overall grade.
        display_setting: String,
        /// Grade categories that are available for coursework in the course.
        grade_categories: Vec<GradeCategory>,
    }

    /// Details for a grade category in a course.
    pub struct GradeCategory {
        /// ID of the grade category.
        id: String,
        /// Name of the grade category.
        name: String,
        /// The weight of the category average as part of overall average, in millipercent.
        weight: i32,
        /// Default value of denominator. Only applicable when grade calculation type is `TOTAL_POINTS`.
        default_grade_denominator: i32,
    }

    /// Topic created by a teacher for the course.
    pub struct Topic {
        /// Identifier of the course. Read-only.
        course_id: String,
        /// Unique identifier for the topic. Read-only.
        topic_id: String,
        /// The name of the topic, generated by the user.
        name: String,
        /// The time the topic was last updated by the system. Read-only.
        update_time: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::models::{DriveFile, Form, Link, YouTubeVideo};

    fn sample_course() -> Course {
        Course {
            id: Some("123".to_string()),
            name: Some("10th Grade Biology".to_string()),
            section: Some("Period 2".to_string()),
            description_heading: Some("Welcome to 10th Grade Biology".to_string()),
            description: Some("We'll be learning about living creatures".to_string()),
            room: Some("301".to_string()),
            owner_id: Some("me".to_string()),
            creation_time: Some("2024-08-20T09:00:00.000Z".to_string()),
            update_time: Some("2024-08-21T09:00:00.000Z".to_string()),
            enrollment_code: Some("abc123".to_string()),
            course_state: Some("ACTIVE".to_string()),
            alternate_link: Some("https://classroom.example/c/123".to_string()),
            teacher_group_email: Some("bio_teachers@example.edu".to_string()),
            course_group_email: Some("bio@example.edu".to_string()),
            teacher_folder: Some(DriveFolder {
                id: Some("folder-t".to_string()),
                title: Some("Biology (Teachers)".to_string()),
                alternate_link: Some("https://drive.example/folder-t".to_string()),
            }),
            course_material_sets: Some(vec![CourseMaterialSet {
                title: Some("Syllabus".to_string()),
                materials: Some(vec![
                    CourseMaterial {
                        drive_file: Some(DriveFile {
                            id: Some("file-s".to_string()),
                            title: Some("Syllabus.pdf".to_string()),
                            alternate_link: Some("https://drive.example/file-s".to_string()),
                            thumbnail_url: None,
                        }),
                        ..Default::default()
                    },
                    CourseMaterial {
                        youtube_video: Some(YouTubeVideo {
                            id: Some("vid-1".to_string()),
                            title: Some("Cells".to_string()),
                            alternate_link: Some("https://youtube.example/vid-1".to_string()),
                            thumbnail_url: Some("https://youtube.example/vid-1.jpg".to_string()),
                        }),
                        link: Some(Link {
                            url: Some("https://example.com/cells".to_string()),
                            title: None,
                            thumbnail_url: None,
                        }),
                        form: Some(Form {
                            form_url: Some("https://forms.example/f1".to_string()),
                            response_url: Some("https://forms.example/f1/r".to_string()),
                            title: Some("Survey".to_string()),
                            thumbnail_url: None,
                        }),
                        ..Default::default()
                    },
                ]),
            }]),
            guardians_enabled: Some(false),
            calendar_id: Some("cal-123@group.calendar.example".to_string()),
            gradebook_settings: Some(GradebookSettings {
                calculation_type: Some("WEIGHTED_CATEGORIES".to_string()),
                display_setting: Some("SHOW_OVERALL_GRADE".to_string()),
                grade_categories: Some(vec![GradeCategory {
                    id: Some("gc-1".to_string()),
                    name: Some("Labs".to_string()),
                    weight: Some(400000),
                    default_grade_denominator: Some(20),
                }]),
            }),
        }
    }

    #[test]
    fn test_course_round_trip() {
        let original = sample_course();
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: Course = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_course_wire_names() {
        let json = serde_json::to_value(sample_course()).unwrap();
        assert_eq!(json["descriptionHeading"], "Welcome to 10th Grade Biology");
        assert_eq!(json["guardiansEnabled"], false);
        assert_eq!(json["gradebookSettings"]["gradeCategories"][0]["weight"], 400000);
        assert_eq!(json["teacherFolder"]["alternateLink"], "https://drive.example/folder-t");
    }

    #[test]
    fn test_absent_fields_omitted() {
        let alias = CourseAlias {
            alias: Some("d:math_101".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&alias).unwrap(),
            r#"{"alias":"d:math_101"}"#
        );
        assert_eq!(serde_json::to_string(&Topic::default()).unwrap(), "{}");
    }
}
