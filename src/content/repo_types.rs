use serde::Serialize;
use sqlx::FromRow;

/// Full content row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CourseContent {
    pub content_id: i32,
    pub course_id: i32,
    pub topic_title: String,
    pub topic_order: i32,
    pub title: String,
    pub content_order: i32,
    pub content_type: String,
    pub content_body: Option<String>,
    pub video_url: Option<String>,
}

/// Content of a course as rendered on the course page.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContentItem {
    pub content_id: i32,
    pub topic_title: String,
    pub topic_order: i32,
    pub title: String,
    pub content_type: String,
    pub content_order: i32,
    pub content_body: Option<String>,
    pub video_url: Option<String>,
}

/// Navigation-only projection: no body, no video.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SyllabusEntry {
    pub content_id: i32,
    pub topic_title: String,
    pub topic_order: i32,
    pub title: String,
    pub content_order: i32,
    pub content_type: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CreatedContent {
    pub content_id: i32,
    pub title: String,
    pub topic_title: String,
}

#[derive(Debug)]
pub struct NewContent {
    pub course_id: i32,
    pub topic_title: String,
    pub topic_order: i32,
    pub title: String,
    pub content_order: i32,
    pub content_type: String,
    pub content_body: Option<String>,
    pub video_url: Option<String>,
}
