use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::{constraint_violation, internal, ApiError, Constraint, INVALID_FIELD_TYPES},
    progress::{
        dto::{CompleteRequest, CompleteResponse, Completion},
        repo,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/progress/complete", post(complete))
}

impl TryFrom<CompleteRequest> for Completion {
    type Error = ApiError;

    fn try_from(req: CompleteRequest) -> Result<Self, Self::Error> {
        let (Some(user_id), Some(content_id)) = (req.user_id, req.content_id) else {
            return Err(ApiError::bad_request(
                "Missing required fields: userId and contentId.",
            ));
        };
        let invalid = || ApiError::bad_request(INVALID_FIELD_TYPES);

        let score = match req.score {
            None => None,
            Some(s) => Some(s.as_f64().ok_or_else(invalid)?),
        };
        let attempts = match req.attempts {
            None => 1,
            Some(a) => a.as_i32().ok_or_else(invalid)?,
        };

        Ok(Completion {
            user_id: user_id.as_id().ok_or_else(invalid)?,
            content_id: content_id.as_id().ok_or_else(invalid)?,
            score,
            attempts,
        })
    }
}

#[instrument(skip(state, payload))]
pub async fn complete(
    State(state): State<AppState>,
    payload: Result<Json<CompleteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CompleteResponse>), ApiError> {
    let Json(payload) = payload?;
    let Completion {
        user_id,
        content_id,
        score,
        attempts,
    } = payload.try_into()?;

    let progress_id =
        match repo::record_completion(&state.db, user_id, content_id, score, attempts).await {
            Ok(id) => id,
            Err(e) if constraint_violation(&e) == Some(Constraint::ForeignKey) => {
                warn!(user_id, content_id, "progress for unknown user or content");
                return Err(ApiError::conflict(
                    "Invalid User ID or Content ID provided.",
                ));
            }
            Err(e) => {
                return Err(internal(
                    "Failed to record user progress due to a server error.",
                )(e))
            }
        };

    info!(progress_id, user_id, content_id, attempts, "progress recorded");
    Ok((
        StatusCode::CREATED,
        Json(CompleteResponse {
            message: "User progress recorded successfully.",
            progress_id,
        }),
    ))
}
