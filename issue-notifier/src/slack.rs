//! Slack incoming-webhook client.
//!
//! Wraps a single pooled `reqwest::Client` that is built once per process and
//! cloned into every invocation.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::ForwardError;

/// Message body posted to a Slack incoming webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackMessage {
    pub text: String,
}

impl SlackMessage {
    /// Notification text for a newly created issue.
    pub fn issue_created(issue_url: &str) -> Self {
        Self {
            text: format!("Issue Created: {}", issue_url),
        }
    }
}

/// What Slack answered. Only ever logged.
#[derive(Debug, Clone)]
pub struct OutboundResult {
    pub status: u16,
    pub body: String,
}

impl OutboundResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Shared Slack webhook client.
#[derive(Clone)]
pub struct SlackClient {
    http: Client,
}

impl SlackClient {
    /// Build the client, applying the configured timeout if there is one.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.slack_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { http })
    }

    /// Wrap an existing client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }

    /// POST a message to `url` and read the whole response body.
    ///
    /// Any HTTP status counts as delivered; only transport failures are errors.
    pub async fn post(
        &self,
        url: &str,
        message: &SlackMessage,
    ) -> Result<OutboundResult, ForwardError> {
        let response = self
            .http
            .post(url)
            .json(message)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!(url = url, error = %e, "slack_request_timeout");
                }
                ForwardError::SlackRequest(e)
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(ForwardError::SlackResponse)?;

        let result = OutboundResult { status, body };

        if result.is_success() {
            info!(status_code = status, response = %result.body, "slack_response_received");
        } else {
            warn!(status_code = status, response = %result.body, "slack_response_not_success");
        }

        Ok(result)
    }
}
