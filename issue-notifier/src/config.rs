//! Configuration module for environment variable parsing.
//!
//! Configuration is read once at process start and handed to the forwarder,
//! so every invocation sees the same values.

use std::env;
use std::time::Duration;

/// Name of the variable holding the Slack incoming-webhook URL.
pub const SLACK_URL_VAR: &str = "SLACK_URL";

/// Largest payload GitHub delivers to a webhook (25 MB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Slack incoming-webhook URL. `None` when unset or empty.
    pub slack_url: Option<String>,

    /// Optional timeout for the outbound Slack request in milliseconds
    pub slack_timeout_ms: Option<u64>,

    /// Port for the web server to listen on
    pub port: u16,

    /// Largest inbound request body accepted, in bytes
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            slack_url: None,
            slack_timeout_ms: None,
            port: 8080,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            slack_url: lookup(SLACK_URL_VAR)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),

            slack_timeout_ms: lookup("SLACK_TIMEOUT_MS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|ms| *ms > 0),

            port: lookup("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(8080),

            max_body_bytes: lookup("MAX_BODY_BYTES")
                .and_then(|v| v.trim().parse().ok())
                .filter(|bytes| *bytes > 0)
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
        }
    }

    /// Configuration pointing at the given Slack URL with defaults elsewhere.
    pub fn with_slack_url(url: impl Into<String>) -> Self {
        Config {
            slack_url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Outbound request timeout, if one was configured.
    pub fn slack_timeout(&self) -> Option<Duration> {
        self.slack_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.slack_url, None);
        assert_eq!(config.slack_timeout(), None);
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_reads_all_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("SLACK_URL", "https://hooks.slack.test/abc"),
            ("SLACK_TIMEOUT_MS", "2500"),
            ("PORT", "3000"),
            ("MAX_BODY_BYTES", "1048576"),
        ]));
        assert_eq!(config.slack_url.as_deref(), Some("https://hooks.slack.test/abc"));
        assert_eq!(config.slack_timeout(), Some(Duration::from_millis(2500)));
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_body_bytes, 1_048_576);
    }

    #[test]
    fn test_empty_slack_url_is_unset() {
        let config = Config::from_lookup(lookup_from(&[("SLACK_URL", "   ")]));
        assert_eq!(config.slack_url, None);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("SLACK_TIMEOUT_MS", "soon"),
            ("PORT", "not-a-port"),
            ("MAX_BODY_BYTES", "0"),
        ]));
        assert_eq!(config.slack_timeout(), None);
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = Config::from_lookup(lookup_from(&[("SLACK_TIMEOUT_MS", "0")]));
        assert_eq!(config.slack_timeout(), None);
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        env::set_var("PORT", "9191");
        let config = Config::from_env();
        assert_eq!(config.port, 9191);
        env::remove_var("PORT");
    }
}
