//! Errors that abort a forwarding pass.

use thiserror::Error;

/// Every way a single invocation can fail.
///
/// The `Display` text is what the caller sees after `Server Error: `.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("Request body is empty.")]
    EmptyBody,

    #[error("Request body is not valid UTF-8: {0}")]
    InvalidUtf8(#[source] std::str::Utf8Error),

    #[error("Request body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("Issue URL not found in the request body.")]
    MissingIssueUrl,

    #[error("SLACK_URL environment variable is not set.")]
    MissingSlackUrl,

    #[error("Failed to send Slack notification: {0}")]
    SlackRequest(#[source] reqwest::Error),

    #[error("Failed to read Slack response: {0}")]
    SlackResponse(#[source] reqwest::Error),
}

impl ForwardError {
    /// Short machine-friendly label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ForwardError::EmptyBody => "empty_body",
            ForwardError::InvalidUtf8(_) => "invalid_utf8",
            ForwardError::MalformedBody(_) => "malformed_body",
            ForwardError::MissingIssueUrl => "missing_issue_url",
            ForwardError::MissingSlackUrl => "missing_slack_url",
            ForwardError::SlackRequest(_) => "slack_request",
            ForwardError::SlackResponse(_) => "slack_response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ForwardError::EmptyBody.to_string(), "Request body is empty.");
        assert_eq!(
            ForwardError::MissingIssueUrl.to_string(),
            "Issue URL not found in the request body."
        );
        assert!(ForwardError::MissingSlackUrl.to_string().contains("SLACK_URL"));
    }

    #[test]
    fn test_malformed_body_keeps_parser_detail() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ForwardError::MalformedBody(err);
        assert!(err.to_string().starts_with("Request body is not valid JSON: "));
        assert_eq!(err.kind(), "malformed_body");
    }
}
