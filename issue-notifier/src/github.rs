//! GitHub webhook payload types.
//!
//! Only the fields the notifier reads are modelled. Everything else in the
//! issue event is ignored by serde.

use serde::Deserialize;

use crate::error::ForwardError;

/// Parsed view of an `issues` webhook body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitHubIssuePayload {
    #[serde(default)]
    pub issue: Option<Issue>,
}

/// The `issue` object of the payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Issue {
    /// Browser URL of the issue
    #[serde(default)]
    pub html_url: Option<String>,
}

impl GitHubIssuePayload {
    /// Parse a raw request body.
    ///
    /// A literal `null` body parses to an empty payload.
    pub fn parse(body: &str) -> Result<Self, ForwardError> {
        let payload: Option<GitHubIssuePayload> =
            serde_json::from_str(body).map_err(ForwardError::MalformedBody)?;
        Ok(payload.unwrap_or_default())
    }

    /// The issue URL, or `MissingIssueUrl` if any part of the path is absent.
    pub fn issue_url(&self) -> Result<&str, ForwardError> {
        self.issue
            .as_ref()
            .and_then(|issue| issue.html_url.as_deref())
            .ok_or(ForwardError::MissingIssueUrl)
    }
}
