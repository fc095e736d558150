//! Student submissions and the requests that move them through their workflow.

use super::{DriveFile, Form, Link, YouTubeVideo};

schema! {
    /// Student submission for course work.
    pub struct StudentSubmission {
        /// Identifier of the course. Read-only.
        course_id: String,
        /// Identifier for the course work this corresponds to. Read-only.
        course_work_id: String,
        /// Classroom-assigned identifier for the student submission. Read-only.
        id: String,
        /// Identifier for the student that owns this submission. Read-only.
        user_id: String,
        /// Creation time of this submission. Read-only.
        creation_time: String,
        /// Last update time of this submission. Read-only.
        update_time: String,
        /// State of this submission. Read-only.
        state: String,
        /// Whether this submission is late. Read-only.
        late: bool,
        /// Optional pending grade. Visible only to course teachers.
        draft_grade: f64,
        /// Optional grade. Visible to students and teachers once returned.
        assigned_grade: f64,
        /// Absolute link to the submission in the Classroom web UI. Read-only.
        alternate_link: String,
        /// Type of course work this submission is for. Read-only.
        course_work_type: String,
        /// Whether this student submission is associated with the Developer
        /// Console project making the request. Read-only.
        associated_with_developer: bool,
        /// The history of the submission (includes state and grade histories). Read-only.
        submission_history: Vec<SubmissionHistory>,
        /// Submission content when `courseWorkType` is `ASSIGNMENT`.
        assignment_submission: AssignmentSubmission,
        /// Submission content when `courseWorkType` is `SHORT_ANSWER_QUESTION`.
        short_answer_submission: ShortAnswerSubmission,
        /// Submission content when `courseWorkType` is `MULTIPLE_CHOICE_QUESTION`.
        multiple_choice_submission: MultipleChoiceSubmission,
    }

    /// Student work for an assignment.
    pub struct AssignmentSubmission {
        /// Attachments added by the student.
        attachments: Vec<Attachment>,
    }

    /// Attachment added to student assignment work.
    ///
    /// When creating attachments, setting the `form` field is not supported.
    pub struct Attachment {
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

    /// Student work for a short answer question.
    pub struct ShortAnswerSubmission {
        /// Student response to a short-answer question.
        answer: String,
    }

    /// Student work for a multiple-choice question.
    pub struct MultipleChoiceSubmission {
        /// Student's select choice.
        answer: String,
    }

    /// The history of the submission.
    pub struct SubmissionHistory {
        /// The state history information of the submission, if present.
        state_history: StateHistory,
        /// The grade history information of the submission, if present.
        grade_history: GradeHistory,
    }

    /// The history of each state this submission has been in.
    pub struct StateHistory {
        /// The workflow pipeline stage.
        state: String,
        /// When the submission entered this state.
        state_timestamp: String,
        /// The teacher or student who made the change.
        actor_user_id: String,
    }

    /// The history of each grade on this submission.
    pub struct GradeHistory {
        /// The type of grade change at this time in the submission grade history.
        grade_change_type: String,
        /// When the grade of the submission was changed.
        grade_timestamp: String,
        /// The teacher who made the grade change.
        actor_user_id: String,
        /// The numerator of the grade at this time in the submission grade history.
        points_earned: f64,
        /// The denominator of the grade at this time in the submission grade history.
        max_points: f64,
    }

    /// Request to modify the attachments of a student submission.
    pub struct ModifyAttachmentsRequest {
        /// Attachments to add. A student submission may not have more than 20 attachments.
        add_attachments: Vec<Attachment>,
    }

    /// Request to turn in a student submission.
    pub struct TurnInStudentSubmissionRequest {}

    /// Request to reclaim a student submission.
    pub struct ReclaimStudentSubmissionRequest {}

    /// Request to return a student submission.
    pub struct ReturnStudentSubmissionRequest {}
}
