//! Issue Notifier - AWS Lambda runtime.
//!
//! API Gateway events are translated into HTTP requests by `lambda_http`.
//! Every request, whatever its stage-prefixed path, reaches the webhook
//! handler.

use lambda_http::{run, Error};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use issue_notifier::{lambda_router, AppState, Config, SlackClient, WebhookForwarder};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch stamps each line, so no timestamp here
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true).without_time())
        .init();

    info!("lambda_starting");

    let config = Config::from_env();
    info!(
        slack_url_set = config.slack_url.is_some(),
        slack_timeout_ms = ?config.slack_timeout_ms,
        max_body_bytes = config.max_body_bytes,
        "config_loaded"
    );

    // Built once per execution environment and reused across invocations
    let slack = SlackClient::new(&config)
        .map_err(|e| Error::from(format!("HTTP client error: {:#}", e)))?;
    let app = lambda_router(AppState::new(WebhookForwarder::new(config, slack)));

    info!("lambda_ready");

    run(app).await
}
