//! Push-notification registrations.

schema! {
    /// An instruction to Classroom to send notifications from the `feed` to the
    /// provided destination.
    pub struct Registration {
        /// A server-generated unique identifier for this registration. Read-only.
        registration_id: String,
        /// Specification for the class of notifications that Classroom should deliver.
        feed: Feed,
        /// The Cloud Pub/Sub topic that notifications are to be sent to.
        cloud_pubsub_topic: CloudPubsubTopic,
        /// The time until which the registration is effective. Read-only.
        expiry_time: String,
    }

    /// A class of notifications that an application can register to receive.
    pub struct Feed {
        /// The type of feed.
        feed_type: String,
        /// Information about a feed with a `feedType` of `COURSE_ROSTER_CHANGES`.
        course_roster_changes_info: CourseRosterChangesInfo,
        /// Information about a feed with a `feedType` of `COURSE_WORK_CHANGES`.
        course_work_changes_info: CourseWorkChangesInfo,
    }

    /// A reference to a Cloud Pub/Sub topic.
    pub struct CloudPubsubTopic {
        /// The `name` field of a Cloud Pub/Sub topic.
        topic_name: String,
    }

    /// Information about a feed of roster changes.
    pub struct CourseRosterChangesInfo {
        /// The `course_id` of the course to subscribe to roster changes for.
        course_id: String,
    }

    /// Information about a feed of course work changes.
    pub struct CourseWorkChangesInfo {
        /// The `course_id` of the course to subscribe to work changes for.
        course_id: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_round_trip() {
        let original = Registration {
            registration_id: Some("reg-1".to_string()),
            feed: Some(Feed {
                feed_type: Some("COURSE_WORK_CHANGES".to_string()),
                course_roster_changes_info: Some(CourseRosterChangesInfo {
                    course_id: Some("123".to_string()),
                }),
                course_work_changes_info: Some(CourseWorkChangesInfo {
                    course_id: Some("456".to_string()),
                }),
            }),
            cloud_pubsub_topic: Some(CloudPubsubTopic {
                topic_name: Some("projects/p/topics/classroom".to_string()),
            }),
            expiry_time: Some("2024-09-12T00:00:00Z".to_string()),
        };

        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: Registration = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);

        let json: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(json["feed"]["courseWorkChangesInfo"]["courseId"], "456");
        assert_eq!(json["cloudPubsubTopic"]["topicName"], "projects/p/topics/classroom");
    }
}
