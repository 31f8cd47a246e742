//! Endpoint defaults, env var names and fixed chat strings.

/// Base URL of the Q&A server when nothing is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Path of the question endpoint, joined onto the base URL.
pub const ASK_PATH: &str = "/ask";

/// Bot text shown when a request fails for any reason.
pub const FALLBACK_REPLY: &str = "Error fetching response.";

/// Prefix of the attribution line under a bot answer.
pub const SOURCE_PREFIX: &str = "Source: ";

pub const ENV_SERVER_URL: &str = "QABOT_SERVER_URL";
pub const ENV_TIMEOUT_SECS: &str = "QABOT_TIMEOUT_SECS";
pub const ENV_THEME: &str = "QABOT_THEME";
