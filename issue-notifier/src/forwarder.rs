//! Core forwarding logic.
//!
//! One invocation is a single linear pass:
//!
//! ```text
//! body → validate → GitHubIssuePayload → SlackMessage → POST → InvocationResponse
//! ```
//!
//! Every failure is returned as a `ForwardError` and mapped to a 500 in
//! [`WebhookForwarder::handle`].

use std::sync::Arc;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::config::Config;
use crate::error::ForwardError;
use crate::github::GitHubIssuePayload;
use crate::slack::{OutboundResult, SlackClient, SlackMessage};

/// Body returned when the notification went out.
pub const SUCCESS_BODY: &str = "Notification sent to Slack";

/// Status and body handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResponse {
    pub status: StatusCode,
    pub body: String,
}

impl InvocationResponse {
    pub fn sent() -> Self {
        Self {
            status: StatusCode::OK,
            body: SUCCESS_BODY.to_string(),
        }
    }

    pub fn server_error(err: &ForwardError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: format!("Server Error: {}", err),
        }
    }
}

impl IntoResponse for InvocationResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.body,
        )
            .into_response()
    }
}

/// Turns GitHub issue webhooks into Slack notifications.
#[derive(Clone)]
pub struct WebhookForwarder {
    config: Arc<Config>,
    slack: SlackClient,
}

impl WebhookForwarder {
    pub fn new(config: Config, slack: SlackClient) -> Self {
        Self {
            config: Arc::new(config),
            slack,
        }
    }

    /// Configuration the forwarder was built with; routers read limits from it.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle one inbound body and always produce a response.
    pub async fn handle(&self, body: impl AsRef<[u8]>) -> InvocationResponse {
        match self.forward(body.as_ref()).await {
            Ok(_) => InvocationResponse::sent(),
            Err(e) => {
                error!(error = %e, error_kind = e.kind(), details = ?e, "github_webhook_failed");
                InvocationResponse::server_error(&e)
            }
        }
    }

    /// Validate, transform and send. Stops at the first failing step.
    pub async fn forward(&self, body: &[u8]) -> Result<OutboundResult, ForwardError> {
        info!(body = %String::from_utf8_lossy(body), "request_body");

        if body.is_empty() {
            return Err(ForwardError::EmptyBody);
        }

        let body = std::str::from_utf8(body).map_err(ForwardError::InvalidUtf8)?;

        let payload = GitHubIssuePayload::parse(body)?;
        let issue_url = payload.issue_url()?;
        info!(issue_url = %issue_url, "issue_url_extracted");

        let message = SlackMessage::issue_created(issue_url);

        let slack_url = self
            .config
            .slack_url
            .as_deref()
            .ok_or(ForwardError::MissingSlackUrl)?;
        info!(slack_url = %slack_url, "slack_webhook_url");

        let result = self.slack.post(slack_url, &message).await?;

        info!(
            issue_url = %issue_url,
            status_code = result.status,
            "slack_notification_sent"
        );

        Ok(result)
    }
}
