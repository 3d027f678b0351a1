//! Session configuration.
//!
//! Configuration via environment variables:
//!
//! - `DAGGER_SESSION_URL` - full endpoint URL (overrides host and port)
//! - `DAGGER_SESSION_HOST` / `DAGGER_SESSION_PORT` - default `127.0.0.1:8080`
//! - `DAGGER_SESSION_TOKEN` - session token, sent as the basic-auth user
//! - `DAGGER_TIMEOUT_SECS` - request timeout (default 30)
//! - `DAGGER_CONNECT_TIMEOUT_SECS` - connect timeout (default 10)
//! - `DAGGER_RETRIES` - transport retries (default 10)

use std::fmt;
use std::time::Duration;

use dag_sdk_types::env_utils::{env_string, env_var_or};
use dag_sdk_types::RetryConfig;

use crate::endpoint::resolve_session_endpoint;

#[derive(Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub endpoint: String,
    pub token: Option<String>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub retry: RetryConfig,
}

impl SessionConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 30;
    const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Config for an explicit endpoint with default timeouts and retries.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: None,
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(Self::DEFAULT_CONNECT_TIMEOUT_SECS),
            retry: RetryConfig::default(),
        }
    }

    /// Build the config from `DAGGER_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = RetryConfig::default();
        Self {
            endpoint: resolve_session_endpoint(),
            token: env_string("DAGGER_SESSION_TOKEN"),
            timeout: Duration::from_secs(env_var_or(
                "DAGGER_TIMEOUT_SECS",
                Self::DEFAULT_TIMEOUT_SECS,
            )),
            connect_timeout: Duration::from_secs(env_var_or(
                "DAGGER_CONNECT_TIMEOUT_SECS",
                Self::DEFAULT_CONNECT_TIMEOUT_SECS,
            )),
            retry: RetryConfig {
                retries: env_var_or("DAGGER_RETRIES", defaults.retries),
                ..defaults
            },
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

// The token is a credential; keep it out of logs.
impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("retry", &self.retry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env() {
        std::env::set_var("DAGGER_SESSION_PORT", "4321");
        std::env::set_var("DAGGER_SESSION_TOKEN", "secret");
        std::env::set_var("DAGGER_RETRIES", "2");
        std::env::remove_var("DAGGER_SESSION_URL");
        std::env::remove_var("DAGGER_SESSION_HOST");

        let cfg = SessionConfig::from_env();
        assert_eq!(cfg.endpoint, "http://127.0.0.1:4321/query");
        assert_eq!(cfg.token.as_deref(), Some("secret"));
        assert_eq!(cfg.retry.retries, 2);
        assert_eq!(cfg.timeout, Duration::from_secs(30));

        std::env::set_var("DAGGER_SESSION_URL", "http://engine:9000/query");
        assert_eq!(SessionConfig::from_env().endpoint, "http://engine:9000/query");

        std::env::remove_var("DAGGER_SESSION_URL");
        std::env::remove_var("DAGGER_SESSION_PORT");
        std::env::remove_var("DAGGER_SESSION_TOKEN");
        std::env::remove_var("DAGGER_RETRIES");
    }

    #[test]
    fn test_debug_redacts_token() {
        let cfg = SessionConfig::new("http://127.0.0.1:8080/query").with_token("hunter2");
        let rendered = format!("{:?}", cfg);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
