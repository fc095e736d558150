//! Course work and course work materials.

use super::{
    Date, DriveFolder, GradeCategory, IndividualStudentsOptions, Material,
    ModifyIndividualStudentsOptions, TimeOfDay,
};

schema! {
    /// Course work created by a teacher for students of the course.
    pub struct CourseWork {
        /// Identifier of the course. Read-only.
        course_id: String,
        /// Classroom-assigned identifier of this course work, unique per course. Read-only.
        id: String,
        /// Title of this course work, between 1 and 3000 characters.
        title: String,
        /// Optional description of this course work, at most 30,000 characters.
        description: String,
        /// Additional materials. CourseWork must have no more than 20 material items.
        materials: Vec<Material>,
        /// Status of this course work. If unspecified, the default state is `DRAFT`.
        state: String,
        /// Absolute link to this course work in the Classroom web UI. Read-only.
        alternate_link: String,
        /// Timestamp when this course work was created. Read-only.
        creation_time: String,
        /// Timestamp of the most recent change to this course work. Read-only.
        update_time: String,
        /// Optional date, in UTC, that submissions for this course work are due.
        ///
        /// Must be specified if `dueTime` is specified.
        due_date: Date,
        /// Optional time of day, in UTC, that submissions for this course work are due.
        ///
        /// Must be specified if `dueDate` is specified.
        due_time: TimeOfDay,
        /// Optional timestamp when this course work is scheduled to be published.
        scheduled_time: String,
        /// Maximum grade for this course work. Zero or unspecified means ungraded.
        max_points: f64,
        /// Type of this course work. Set on creation and cannot be changed.
        work_type: String,
        /// Whether this course work item is associated with the Developer
        /// Console project making the request. Read-only.
        associated_with_developer: bool,
        /// Assignee mode of the coursework. If unspecified, the default value is `ALL_STUDENTS`.
        assignee_mode: String,
        /// Identifiers of students with access to the coursework.
        individual_students_options: IndividualStudentsOptions,
        /// Setting to determine when students are allowed to modify submissions.
        submission_modification_mode: String,
        /// Identifier for the user that created the coursework. Read-only.
        creator_user_id: String,
        /// Identifier for the topic that this coursework is associated with.
        topic_id: String,
        /// The category that this coursework's grade contributes to.
        grade_category: GradeCategory,
        /// Assignment details. Set only when `workType` is `ASSIGNMENT`. Read-only.
        assignment: Assignment,
        /// Multiple choice question details. Required when `workType` is `MULTIPLE_CHOICE_QUESTION`.
        multiple_choice_question: MultipleChoiceQuestion,
    }

    /// Additional details for assignments.
    pub struct Assignment {
        /// Drive folder where attachments from student submissions are placed. Read-only.
        student_work_folder: DriveFolder,
    }

    /// Additional details for multiple-choice questions.
    pub struct MultipleChoiceQuestion {
        /// Possible choices.
        choices: Vec<String>,
    }

    /// Request to modify assignee mode and options of a coursework.
    pub struct ModifyCourseWorkAssigneesRequest {
        /// Mode of the coursework describing whether it will be assigned to all
        /// students or specified individual students.
        assignee_mode: String,
        /// Set which students are assigned or not assigned to the coursework.
        ///
        /// Must be specified only when `assigneeMode` is `INDIVIDUAL_STUDENTS`.
        modify_individual_students_options: ModifyIndividualStudentsOptions,
    }

    /// Course work material created by a teacher for students of the course.
    pub struct CourseWorkMaterial {
        /// Identifier of the course. Read-only.
        course_id: String,
        /// Classroom-assigned identifier of this course work material, unique per course. Read-only.
        id: String,
        /// Title of this course work material, between 1 and 3000 characters.
        title: String,
        /// Optional description of this course work material, at most 30,000 characters.
        description: String,
        /// Additional materials. A course work material must have no more than 20 material items.
        materials: Vec<Material>,
        /// Status of this course work material. If unspecified, the default state is `DRAFT`.
        state: String,
        /// Absolute link to this course work material in the Classroom web UI. Read-only.
        alternate_link: String,
        /// Timestamp when this course work material was created. Read-only.
        creation_time: String,
        /// Timestamp of the most recent change to this course work material. Read-only.
        update_time: String,
        /// Optional timestamp when this course work material is scheduled to be published.
        scheduled_time: String,
        /// Assignee mode of the course work material. If unspecified, the default value is `ALL_STUDENTS`.
        assignee_mode: String,
        /// Identifiers of students with access to the course work material.
        individual_students_options: IndividualStudentsOptions,
        /// Identifier for the user that created the course work material. Read-only.
        creator_user_id: String,
        /// Identifier for the topic that this course work material is associated with.
        topic_id: String,
    }
}
