use serde::{Deserialize, Serialize};

use crate::validation::Numeric;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRequest {
    pub user_id: Option<Numeric>,
    pub content_id: Option<Numeric>,
    pub score: Option<Numeric>,
    pub attempts: Option<Numeric>,
}

/// Validated completion submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub user_id: i32,
    pub content_id: i32,
    pub score: Option<f64>,
    pub attempts: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteResponse {
    pub message: &'static str,
    pub progress_id: i32,
}
