//! Issue Notifier - forwards GitHub issue webhooks to Slack.
//!
//! This library is shared by two binaries:
//! - `issue-notifier`: standalone web server
//! - `issue-notifier-lambda`: AWS Lambda behind API Gateway
//!
//! ## Flow
//!
//! ```text
//! GitHub → POST /webhooks/github → WebhookForwarder → Slack incoming webhook
//! ```

pub mod config;
pub mod error;
pub mod forwarder;
pub mod github;
pub mod slack;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use error::ForwardError;
pub use forwarder::{InvocationResponse, WebhookForwarder};
pub use github::GitHubIssuePayload;
pub use slack::{OutboundResult, SlackClient, SlackMessage};
pub use web::{lambda_router, router, AppState};
