use serde::{Deserialize, Serialize};

use crate::courses::repo_types::{CreatedCourse, SyllabusTopic};

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub title: Option<String>,
    pub course_summary: Option<String>,
    pub what_you_will_learn: Option<Vec<String>>,
    pub syllabus_structure: Option<Vec<SyllabusTopic>>,
}

#[derive(Debug, Serialize)]
pub struct CreateCourseResponse {
    pub message: &'static str,
    pub course: CreatedCourse,
}

/// Query string of `GET /course-details?courseId=`.
#[derive(Debug, Deserialize)]
pub struct CourseDetailsQuery {
    #[serde(rename = "courseId")]
    pub course_id: Option<String>,
}
