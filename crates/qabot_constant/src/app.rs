//! Application metadata constants

pub const NAME: &str = "qabot";
pub const DISPLAY_NAME: &str = "qabot";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Terminal chat client for a document Q&A server";

/// Per-user config directory (under $HOME), holds the `env` file.
pub const DATA_DIR: &str = ".qabot";
/// Env file name inside DATA_DIR.
pub const ENV_FILE: &str = "env";
