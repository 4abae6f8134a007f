use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    enrollments::{
        dto::{EnrollRequest, EnrollResponse, EnrollmentsQuery},
        repo,
        repo_types::EnrolledCourse,
    },
    error::{constraint_violation, internal, ApiError, Constraint},
    state::AppState,
    users::repo_types::PublicUser,
    validation::parse_id,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/enroll", post(enroll))
        .route("/enrollments", get(list_user_enrollments))
        .route("/course-enrollments/:course_id", get(list_course_enrollees))
}

#[instrument(skip(state, payload))]
pub async fn enroll(
    State(state): State<AppState>,
    payload: Result<Json<EnrollRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EnrollResponse>), ApiError> {
    let Json(payload) = payload?;
    let (Some(user_id), Some(course_id)) = (payload.user_id, payload.course_id) else {
        return Err(ApiError::bad_request("User ID and Course ID are required"));
    };
    let (Some(user_id), Some(course_id)) = (user_id.as_id(), course_id.as_id()) else {
        return Err(ApiError::bad_request("User ID and Course ID must be numeric"));
    };

    let enrollment_id = match repo::enroll(&state.db, user_id, course_id).await {
        Ok(Some(id)) => id,
        Ok(None) => {
            warn!(user_id, course_id, "already enrolled");
            return Err(ApiError::conflict("User is already enrolled in this course"));
        }
        Err(e) if constraint_violation(&e) == Some(Constraint::ForeignKey) => {
            warn!(user_id, course_id, "enrollment for unknown user or course");
            return Err(ApiError::conflict("Invalid User ID or Course ID provided."));
        }
        Err(e) => return Err(internal("An error occurred during enrollment")(e)),
    };

    info!(enrollment_id, user_id, course_id, "user enrolled");
    Ok((
        StatusCode::CREATED,
        Json(EnrollResponse {
            message: "Enrollment successful",
            enrollment_id,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_user_enrollments(
    State(state): State<AppState>,
    Query(query): Query<EnrollmentsQuery>,
) -> Result<Json<Vec<EnrolledCourse>>, ApiError> {
    let user_id = query
        .user_id
        .as_deref()
        .and_then(parse_id)
        .ok_or_else(|| ApiError::bad_request("Valid userId is required"))?;
    let courses = repo::courses_for_user(&state.db, user_id)
        .await
        .map_err(internal("Failed to fetch enrollments"))?;
    Ok(Json(courses))
}

#[instrument(skip(state))]
pub async fn list_course_enrollees(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let course_id =
        parse_id(&course_id).ok_or_else(|| ApiError::bad_request("Valid Course ID is required"))?;
    let users = repo::users_for_course(&state.db, course_id)
        .await
        .map_err(internal("Failed to fetch enrolled users"))?;
    Ok(Json(users))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INVALID_FIELD_TYPES;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
    };
    use tower::ServiceExt;

    async fn send(req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let res = router().with_state(AppState::fake()).oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    fn post_enroll(body: &str) -> Request<Body> {
        Request::post("/enroll")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn enroll_requires_both_ids() {
        let (status, body) = send(post_enroll(r#"{"userId":1}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User ID and Course ID are required");
    }

    #[tokio::test]
    async fn enroll_rejects_non_numeric_ids() {
        let (status, body) = send(post_enroll(r#"{"userId":"one","courseId":2}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User ID and Course ID must be numeric");
    }

    #[tokio::test]
    async fn deserializer_details_are_not_echoed() {
        let (status, body) = send(post_enroll(r#"{"userId":true,"courseId":2}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], INVALID_FIELD_TYPES);

        let (status, body) = send(post_enroll(r#"{"userId":1,"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Request body is not valid JSON.");
    }

    #[tokio::test]
    async fn user_enrollments_require_user_id() {
        let (status, _) = send(Request::get("/enrollments").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) =
            send(Request::get("/enrollments?userId=x").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn course_enrollees_require_numeric_course_id() {
        let (status, body) =
            send(Request::get("/course-enrollments/abc").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Valid Course ID is required");
    }

    #[test]
    fn enroll_response_uses_camel_case() {
        let json = serde_json::to_value(EnrollResponse {
            message: "Enrollment successful",
            enrollment_id: 9,
        })
        .unwrap();
        assert_eq!(json["enrollmentId"], 9);
    }
}
