//! Error types for `/ask` calls.
//!
//! Callers that only need "it failed" can treat every variant the same; the
//! variants exist for logs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AskError {
    /// Invalid base URL or timeout value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection, timeout or body read failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status.
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not valid JSON of the expected shape.
    #[error("Malformed JSON body: {0}")]
    Decode(String),

    /// JSON was valid but had no `answer`.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request task ended (panicked or was aborted) before producing a result.
    #[error("Request ended without a reply")]
    Interrupted,
}

impl AskError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, AskError::Transport(e) if e.is_timeout())
    }
}

impl From<qabot_core::CoreError> for AskError {
    fn from(err: qabot_core::CoreError) -> Self {
        match err {
            qabot_core::CoreError::Json(e) => AskError::Decode(e.to_string()),
            other => AskError::MalformedResponse(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message() {
        let err = AskError::Status {
            status: 400,
            body: r#"{"answer":"Error: No input received"}"#.into(),
        };
        assert!(err.to_string().starts_with("Server returned 400"));
        assert!(!err.is_timeout());
    }

    #[test]
    fn missing_answer_maps_to_malformed_response() {
        let err = AskError::from(qabot_core::CoreError::MissingAnswer);
        assert!(matches!(err, AskError::MalformedResponse(_)));
    }

    #[test]
    fn json_error_maps_to_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err = AskError::from(qabot_core::CoreError::Json(json_err));
        assert!(matches!(err, AskError::Decode(_)));
    }
}
