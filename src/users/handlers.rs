use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::password::hash_password,
    error::{constraint_violation, internal, ApiError, Constraint},
    state::AppState,
    users::{
        dto::CreateUserRequest,
        repo_types::{PublicUser, User},
    },
    validation::{is_valid_email, non_blank, normalize_email, parse_id},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let users = PublicUser::list(&state.db)
        .await
        .map_err(internal("Failed to fetch users"))?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PublicUser>, ApiError> {
    let id = parse_id(&id).ok_or_else(|| ApiError::bad_request("Valid user ID is required"))?;
    PublicUser::find(&state.db, id)
        .await
        .map_err(internal("Failed to fetch user"))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("User not found"))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(payload) = payload?;
    let (Some(name), Some(email), Some(password)) = (
        non_blank(payload.name),
        non_blank(payload.email),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::bad_request("Missing user information"));
    };

    let email = normalize_email(&email);
    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(ApiError::bad_request("Invalid email"));
    }

    let hash = hash_password(&password).map_err(internal("Failed to create user"))?;

    let user = match User::create(&state.db, name.trim(), &email, &hash).await {
        Ok(u) => u,
        Err(e) if constraint_violation(&e) == Some(Constraint::Unique) => {
            warn!(email = %email, "email already registered");
            return Err(ApiError::conflict("Email already registered"));
        }
        Err(e) => return Err(internal("Failed to create user")(e)),
    };

    info!(user_id = user.user_id, email = %user.email, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn post_json(body: &str) -> Request<Body> {
        Request::post("/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn create_requires_all_fields() {
        let (status, body) = send(post_json(r#"{"name":"Ana","email":"ana@x.com"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing user information");

        let (status, _) = send(post_json(r#"{"name":"  ","email":"ana@x.com","password":"pw"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_rejects_invalid_email() {
        let (status, body) = send(post_json(r#"{"name":"Ana","email":"nope","password":"pw"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid email");
    }

    #[tokio::test]
    async fn get_rejects_non_numeric_id() {
        let (status, body) = send(Request::get("/users/abc").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Valid user ID is required");
    }

    #[tokio::test]
    async fn delete_is_not_allowed() {
        let (status, _) = send(Request::delete("/users").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn created_user_serializes_without_hash() {
        let user = User {
            user_id: 1,
            name: "Ana".into(),
            email: "ana@x.com".into(),
            password_hash: "$argon2id$...".into(),
            created_at: time::macros::datetime!(2024-01-02 03:04:05 UTC),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "user_id": 1,
                "name": "Ana",
                "email": "ana@x.com",
                "created_at": "2024-01-02T03:04:05Z"
            })
        );
    }
}
