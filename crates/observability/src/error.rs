//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during observability initialization
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Subscriber or exporter setup failed
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),
}
