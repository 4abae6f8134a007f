use serde::Serialize;
use sqlx::FromRow;

/// A course a user is enrolled in.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EnrolledCourse {
    pub course_id: i32,
    pub title: String,
    pub course_summary: String,
}
