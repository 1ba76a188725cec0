//! Webhook endpoint handlers.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, Uri},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::forwarder::{InvocationResponse, WebhookForwarder};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: WebhookForwarder,
}

impl AppState {
    pub fn new(forwarder: WebhookForwarder) -> Self {
        Self { forwarder }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// GitHub Webhook
// =============================================================================

/// GitHub issue webhook endpoint.
///
/// The body is taken as raw bytes so that empty, non-UTF-8 and malformed
/// bodies reach the forwarder and get the same `Server Error:` treatment as
/// everything else.
pub async fn github_webhook(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> InvocationResponse {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string()
    };

    info!(
        method = %method,
        uri = %uri,
        github_event = %header_value("X-GitHub-Event"),
        github_delivery = %header_value("X-GitHub-Delivery"),
        headers = ?headers,
        body_length = body.len(),
        "github_webhook_received"
    );

    state.forwarder.handle(&body).await
}
