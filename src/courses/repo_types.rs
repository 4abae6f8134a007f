use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};

/// One entry of a course's syllabus outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyllabusTopic {
    pub order: i32,
    pub title: String,
}

/// Row returned by the course listing.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CourseSummary {
    pub course_id: i32,
    pub title: String,
    pub course_summary: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Course {
    pub course_id: i32,
    pub title: String,
    pub course_summary: String,
    pub what_you_will_learn: Json<Vec<String>>,
    pub syllabus_structure: Json<Vec<SyllabusTopic>>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CreatedCourse {
    pub course_id: i32,
    pub title: String,
}

#[derive(Debug)]
pub struct NewCourse {
    pub title: String,
    pub course_summary: String,
    pub what_you_will_learn: Vec<String>,
    pub syllabus_structure: Vec<SyllabusTopic>,
}
