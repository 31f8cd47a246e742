//! Configuration for the `/ask` client.
//!
//! Base URL of the Q&A server plus an optional per-request timeout. No timeout
//! unless one is configured.

use std::time::Duration;

use qabot_constant::defaults::{ASK_PATH, DEFAULT_SERVER_URL, ENV_SERVER_URL, ENV_TIMEOUT_SECS};

use crate::error::AskError;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Server root, e.g. "http://127.0.0.1:5000". `/ask` is appended.
    pub base_url: String,
    /// Whole-request timeout. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Create config from environment variables.
    ///
    /// Optional: `QABOT_SERVER_URL` (default: http://127.0.0.1:5000)
    /// Optional: `QABOT_TIMEOUT_SECS` (whole seconds, > 0)
    pub fn from_env() -> Result<Self, AskError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [ClientConfig::from_env] but reads through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AskError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(ENV_SERVER_URL)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let timeout = match lookup(ENV_TIMEOUT_SECS).map(|s| s.trim().to_string()) {
            Some(raw) if !raw.is_empty() => Some(parse_timeout_secs(&raw)?),
            _ => None,
        };

        Ok(Self { base_url, timeout })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full endpoint URL: base with any trailing slashes dropped, then `/ask`.
    pub fn ask_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ASK_PATH)
    }
}

/// Parse a positive whole number of seconds.
pub fn parse_timeout_secs(raw: &str) -> Result<Duration, AskError> {
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => Err(AskError::Config(format!(
            "{} must be a positive number of seconds, got '{}'",
            ENV_TIMEOUT_SECS, raw
        ))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_env_empty() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_SERVER_URL);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn reads_server_url_and_timeout() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_SERVER_URL, "http://qa.internal:8080"),
            (ENV_TIMEOUT_SECS, "30"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://qa.internal:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn blank_server_url_falls_back_to_default() {
        let config = ClientConfig::from_lookup(lookup(&[(ENV_SERVER_URL, "  ")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn invalid_timeout_is_config_error() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, AskError::Config(_)));
        assert!(parse_timeout_secs("0").is_err());
    }

    #[test]
    fn ask_url_joins_path() {
        assert_eq!(ClientConfig::new("http://localhost:5000").ask_url(), "http://localhost:5000/ask");
        assert_eq!(ClientConfig::new("http://localhost:5000/").ask_url(), "http://localhost:5000/ask");
        assert_eq!(ClientConfig::new("http://host/qa//").ask_url(), "http://host/qa/ask");
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::default()
            .with_base_url("http://other:1")
            .with_timeout(Some(Duration::from_secs(5)));
        assert_eq!(config.ask_url(), "http://other:1/ask");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
