use serde::{Deserialize, Serialize};

use crate::validation::Numeric;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub user_id: Option<Numeric>,
    pub course_id: Option<Numeric>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollResponse {
    pub message: &'static str,
    pub enrollment_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct EnrollmentsQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}
