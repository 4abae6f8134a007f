use axum::{
    extract::{rejection::JsonRejection, FromRef, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse},
        jwt::JwtKeys,
        password::{verify_against_dummy, verify_password},
    },
    error::{internal, ApiError},
    state::AppState,
    users::repo_types::User,
    validation::normalize_email,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized(INVALID_CREDENTIALS.into())
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(payload) = payload?;
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        warn!("login missing email or password");
        return Err(invalid_credentials());
    };
    let email = normalize_email(&email);

    let user = match User::find_by_email(&state.db, &email)
        .await
        .map_err(internal("An error occurred during login"))?
    {
        Some(u) => u,
        None => {
            verify_against_dummy(&password);
            warn!(email = %email, "login unknown email");
            return Err(invalid_credentials());
        }
    };

    let ok = verify_password(&password, &user.password_hash)
        .map_err(internal("An error occurred during login"))?;
    if !ok {
        warn!(email = %email, user_id = user.user_id, "login invalid password");
        return Err(invalid_credentials());
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys
        .sign(user.user_id, &user.email)
        .map_err(internal("An error occurred during login"))?;

    info!(user_id = user.user_id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful",
        user: user.into(),
        token,
    }))
}
