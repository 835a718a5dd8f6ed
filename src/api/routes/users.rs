//! Sample endpoints covering each severity tier.

use axum::{extract::Path, http::StatusCode, response::Redirect, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

pub async fn get_user(Path(id): Path<u64>) -> Json<UserResponse> {
    Json(UserResponse {
        id,
        name: format!("user-{id}"),
    })
}

/// Rejects every login.
pub async fn login(Json(request): Json<LoginRequest>) -> StatusCode {
    tracing::debug!(username = %request.username, "rejecting login");
    StatusCode::UNAUTHORIZED
}

pub async fn crash() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

pub async fn moved() -> Redirect {
    Redirect::temporary("/health")
}

pub async fn panicking() -> StatusCode {
    panic!("handler panicked on purpose")
}
