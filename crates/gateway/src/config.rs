//! Connection settings for the hosted backend.

use std::time::Duration;

use crate::errors::RestError;

/// Default timeout for requests against the hosted backend.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the project base URL.
pub const ENV_API_URL: &str = "TOURDESK_API_URL";
/// Environment variable holding the project API key.
pub const ENV_API_KEY: &str = "TOURDESK_API_KEY";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "TOURDESK_REQUEST_TIMEOUT_SECS";

/// Connection settings shared by the query, auth and storage clients.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Project base URL, without a trailing slash.
    pub url: String,
    /// Project API key, sent as the `apikey` header on every request.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(url: &str, api_key: &str) -> Self {
        Self {
            url: url.trim().trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads the connection settings from the environment.
    pub fn from_env() -> Result<Self, RestError> {
        let url = required_env(ENV_API_URL)?;
        let api_key = required_env(ENV_API_KEY)?;

        let mut config = Self::new(&url, &api_key);
        if let Some(secs) = std::env::var(ENV_REQUEST_TIMEOUT_SECS)
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                RestError::Config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_REQUEST_TIMEOUT_SECS, secs
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

fn required_env(name: &str) -> Result<String, RestError> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| RestError::Config(format!("{} is not set", name)))
}
