use serde::{Deserialize, Serialize};

use crate::{content::repo_types::CreatedContent, validation::Numeric};

#[derive(Debug, Deserialize)]
pub struct AddContentRequest {
    pub course_id: Option<Numeric>,
    pub topic_title: Option<String>,
    pub topic_order: Option<Numeric>,
    pub title: Option<String>,
    pub content_order: Option<Numeric>,
    pub content_type: Option<String>,
    pub content_body: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddContentResponse {
    pub message: &'static str,
    pub content: CreatedContent,
}
