//! Building blocks shared by several Classroom resources.

schema! {
    /// A generic empty message, returned by deletes and state transitions.
    pub struct Empty {}

    /// A whole or partial calendar date.
    ///
    /// A zero year means a recurring date, a zero day means a year and month.
    pub struct Date {
        /// Year of the date, 1 to 9999, or 0 for a date without a year.
        year: i32,
        /// Month of a year, 1 to 12, or 0 for a year without a month and day.
        month: i32,
        /// Day of a month, 1 to 31, or 0 for a year by itself or a year and month.
        day: i32,
    }

    /// A time of day; date and time zone are specified elsewhere.
    pub struct TimeOfDay {
        /// Hours of day in 24 hour format, 0 to 23.
        hours: i32,
        /// Minutes of hour of day, 0 to 59.
        minutes: i32,
        /// Seconds of minutes of the time, 0 to 59.
        seconds: i32,
        /// Fractions of seconds in nanoseconds.
        nanos: i32,
    }

    /// Representation of a Google Drive folder.
    pub struct DriveFolder {
        /// Drive API resource ID.
        id: String,
        /// Title of the Drive folder. Read-only.
        title: String,
        /// URL that can be used to access the Drive folder. Read-only.
        alternate_link: String,
    }

    /// Representation of a Google Drive file.
    pub struct DriveFile {
        /// Drive API resource ID.
        id: String,
        /// Title of the Drive item. Read-only.
        title: String,
        /// URL that can be used to access the Drive item. Read-only.
        alternate_link: String,
        /// URL of a thumbnail image of the Drive item. Read-only.
        thumbnail_url: String,
    }

    /// Drive file that is used as material for course work.
    pub struct SharedDriveFile {
        /// Drive file details.
        drive_file: DriveFile,
        /// Mechanism by which students access the Drive item.
        share_mode: String,
    }

    /// URL item.
    pub struct Link {
        /// URL to link to. Must be a valid UTF-8 string of at most 2024 characters.
        url: String,
        /// Title of the target of the URL. Read-only.
        title: String,
        /// URL of a thumbnail image of the target URL. Read-only.
        thumbnail_url: String,
    }

    /// Google Forms item.
    pub struct Form {
        /// URL of the form.
        form_url: String,
        /// URL of the form responses document. Only set if responses have been recorded.
        response_url: String,
        /// Title of the Form. Read-only.
        title: String,
        /// URL of a thumbnail image of the Form. Read-only.
        thumbnail_url: String,
    }

    /// YouTube video item.
    pub struct YouTubeVideo {
        /// YouTube API resource ID.
        id: String,
        /// Title of the YouTube video. Read-only.
        title: String,
        /// URL that can be used to view the YouTube video. Read-only.
        alternate_link: String,
        /// URL of a thumbnail image of the YouTube video. Read-only.
        thumbnail_url: String,
    }

    /// Material attached to course work or an announcement.
    ///
    /// Exactly one of the fields is expected to be set.
    pub struct Material {
        /// Google Drive file material.
        drive_file: SharedDriveFile,
        /// YouTube video material.
        youtube_video: YouTubeVideo,
        /// Link material. On creation, this is upgraded to a more appropriate type if possible.
        link: Link,
        /// Google Forms material.
        form: Form,
    }

    /// A material attached to a course as part of a material set.
    pub struct CourseMaterial {
        /// Google Drive file attachment.
        drive_file: DriveFile,
        /// YouTube video attachment.
        #[serde(rename = "youTubeVideo")]
        youtube_video: YouTubeVideo,
        /// Link attachment.
        link: Link,
        /// Google Forms attachment.
        form: Form,
    }

    /// Assignee details about a coursework or announcement.
    ///
    /// Set if and only if `assigneeMode` is `INDIVIDUAL_STUDENTS`.
    pub struct IndividualStudentsOptions {
        /// Identifiers for the students that have access to the item.
        student_ids: Vec<String>,
    }

    /// Students to add to or remove from an individually assigned item.
    pub struct ModifyIndividualStudentsOptions {
        /// IDs of students to be added as having access to this item.
        add_student_ids: Vec<String>,
        /// IDs of students to be removed from having access to this item.
        remove_student_ids: Vec<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted() {
        let link = Link {
            url: Some("https://example.com".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json, serde_json::json!({ "url": "https://example.com" }));
    }

    #[test]
    fn test_youtube_field_names_differ_by_schema() {
        let video = YouTubeVideo {
            id: Some("abc".to_string()),
            ..Default::default()
        };

        let material = Material {
            youtube_video: Some(video.clone()),
            ..Default::default()
        };
        let course_material = CourseMaterial {
            youtube_video: Some(video),
            ..Default::default()
        };

        let material = serde_json::to_value(&material).unwrap();
        let course_material = serde_json::to_value(&course_material).unwrap();
        assert!(material.get("youtubeVideo").is_some());
        assert!(course_material.get("youTubeVideo").is_some());
    }

    #[test]
    fn test_empty_decodes_from_object() {
        let empty: Empty = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Empty {});
        assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
    }
}
