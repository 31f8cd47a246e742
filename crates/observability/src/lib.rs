//! qabot observability: tracing setup shared by the CLI and the TUI.
//!
//! - `EnvFilter` from `QABOT_LOG`, then `OTEL_LOG_LEVEL` / `RUST_LOG` (default `info`)
//! - optional console fmt layer (off inside the TUI, which owns the terminal)
//! - optional OTLP span export when `OTEL_EXPORTER_OTLP_ENDPOINT` is set
//! - optional log sink: every event formatted to one line and handed to a callback
//!   (the TUI shows these on its logs screen)
//!
//! ```no_run
//! use qabot_observability::{init, ObservabilityConfig};
//!
//! init(ObservabilityConfig::from_env().with_console(false))?;
//! tracing::info!("client started");
//! # Ok::<(), qabot_observability::ObservabilityError>(())
//! ```

pub mod config;
pub mod error;
pub mod sink_layer;
pub mod telemetry;
pub mod tracing;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::{init, shutdown};
pub use tracing::{record_duration, record_error};
