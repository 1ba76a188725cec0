//! Web module exposing the forwarder over HTTP.
//!
//! The standalone server uses [`router`]:
//! - `POST /webhooks/github` forwards an issue event to Slack
//! - `GET /health` reports liveness
//!
//! Lambda uses [`lambda_router`], which answers every path API Gateway maps
//! to the function. REST API events arrive prefixed with their stage
//! (`/prod/...`), so fixed routes would never match there.

pub mod handlers;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::{github_webhook, health, AppState, HealthResponse};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let body_limit = state.forwarder.config().max_body_bytes;

    Router::new()
        .route("/health", get(health))
        .route("/webhooks/github", post(github_webhook))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the Lambda router: every request goes to the webhook handler.
pub fn lambda_router(state: AppState) -> Router {
    let body_limit = state.forwarder.config().max_body_bytes;

    Router::new()
        .fallback(github_webhook)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
