pub mod health;
pub mod users;

use axum::{routing::get, routing::post, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::middleware::RequestLoggerLayer;
use crate::api::state::AppState;

/// Panics are turned into 500s outside the logger, so a panicking handler
/// is logged with an unknown status.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/users/{id}", get(users::get_user))
        .route("/login", post(users::login))
        .route("/crash", get(users::crash))
        .route("/redirect", get(users::moved))
        .route("/panic", get(users::panicking))
        .layer(RequestLoggerLayer::new(state.request_log.clone()))
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
