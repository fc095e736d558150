//! Paged list responses.
//!
//! Every list response carries a `nextPageToken` when more results exist.
//! Pages are not traversed here; callers pass the token back as `pageToken`.

use super::{
    Announcement, Course, CourseAlias, CourseWork, CourseWorkMaterial, Guardian,
    GuardianInvitation, Invitation, Student, StudentSubmission, Teacher, Topic,
};

schema! {
    /// Response when listing courses.
    pub struct ListCoursesResponse {
        /// Courses that match the list request.
        courses: Vec<Course>,
        /// Token identifying the next page of results to return.
        next_page_token: String,
    }

    /// Response when listing course aliases.
    pub struct ListCourseAliasesResponse {
        /// The course aliases.
        aliases: Vec<CourseAlias>,
        /// Token identifying the next page of results to return.
        next_page_token: String,
    }

    /// Response when listing announcements.
    pub struct ListAnnouncementsResponse {
        /// Announcement items that match the request.
        announcements: Vec<Announcement>,
        /// Token identifying the next page of results to return.
        next_page_token: String,
    }

    /// Response when listing course work.
    pub struct ListCourseWorkResponse {
        /// Course work items that match the request.
        course_work: Vec<CourseWork>,
        /// Token identifying the next page of results to return.
        next_page_token: String,
    }

    /// Response when listing course work material.
    pub struct ListCourseWorkMaterialResponse {
        /// Course work material items that match the request.
        course_work_material: Vec<CourseWorkMaterial>,
        /// Token identifying the next page of results to return.
        next_page_token: String,
    }

    /// Response when listing student submissions.
    pub struct ListStudentSubmissionsResponse {
        /// Student work that matches the request.
        student_submissions: Vec<StudentSubmission>,
        /// Token identifying the next page of results to return.
        next_page_token: String,
    }

    /// Response when listing topics.
    pub struct ListTopicResponse {
        /// Topic items that match the request.
        topic: Vec<Topic>,
        /// Token identifying the next page of results to return.
        next_page_token: String,
    }

    /// Response when listing students.
    pub struct ListStudentsResponse {
        /// Students who match the list request.
        students: Vec<Student>,
        /// Token identifying the next page of results to return.
        next_page_token: String,
    }

    /// Response when listing teachers.
    pub struct ListTeachersResponse {
        /// Teachers who match the list request.
        teachers: Vec<Teacher>,
        /// Token identifying the next page of results to return.
        next_page_token: String,
    }

    /// Response when listing invitations.
    pub struct ListInvitationsResponse {
        /// Invitations that match the list request.
        invitations: Vec<Invitation>,
        /// Token identifying the next page of results to return.
        next_page_token: String,
    }

    /// Response when listing guardians.
    pub struct ListGuardiansResponse {
        /// Guardians on this page of results that met the criteria specified in the request.
        guardians: Vec<Guardian>,
        /// Token identifying the next page of results to return.
        next_page_token: String,
    }

    /// Response when listing guardian invitations.
    pub struct ListGuardianInvitationsResponse {
        /// Guardian invitations that matched the list request.
        guardian_invitations: Vec<GuardianInvitation>,
        /// Token identifying the next page of results to return.
        next_page_token: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_courses_decodes_page_token() {
        let json = r#"{
            "courses": [{"id": "1", "name": "Biology"}, {"id": "2", "name": "Chemistry"}],
            "nextPageToken": "page-2"
        }"#;
        let list: ListCoursesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.courses.as_ref().map(Vec::len), Some(2));
        assert_eq!(list.next_page_token.as_deref(), Some("page-2"));
    }

    #[test]
    fn test_empty_list_decodes() {
        let list: ListTopicResponse = serde_json::from_str("{}").unwrap();
        assert!(list.topic.is_none());
        assert!(list.next_page_token.is_none());
    }
}
