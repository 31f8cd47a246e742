//! Configuration for logging and trace export

use std::sync::Arc;

/// Sink for formatted log lines (e.g. the TUI logs screen). Called from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

/// Default service name reported on spans.
pub const DEFAULT_SERVICE_NAME: &str = "qabot";

/// Observability configuration
#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Service name for traces
    pub service_name: String,

    /// Service version (optional)
    pub service_version: Option<String>,

    /// OTLP endpoint for trace export (e.g., "http://localhost:4317")
    pub otlp_endpoint: Option<String>,

    /// Write formatted events to stderr
    pub enable_console: bool,

    /// Filter directive (e.g., "info", "warn,qabot.trace=debug").
    /// Falls back to `RUST_LOG`, then "info", when unset.
    pub log_level: Option<String>,

    /// Optional sink for each formatted log line.
    pub log_sink: Option<LogSink>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_version: None,
            otlp_endpoint: None,
            enable_console: true,
            log_level: None,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("service_version", &self.service_version)
            .field("otlp_endpoint", &self.otlp_endpoint)
            .field("enable_console", &self.enable_console)
            .field("log_level", &self.log_level)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = Some(version.into());
        self
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `OTEL_SERVICE_NAME` → service_name (default "qabot")
    /// - `OTEL_EXPORTER_OTLP_ENDPOINT` → otlp_endpoint (export disabled when unset)
    /// - `QABOT_LOG`, then `OTEL_LOG_LEVEL` → log_level
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [ObservabilityConfig::from_env] but reads through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let service_name =
            non_empty("OTEL_SERVICE_NAME").unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
        let otlp_endpoint = non_empty("OTEL_EXPORTER_OTLP_ENDPOINT");
        let log_level = non_empty("QABOT_LOG").or_else(|| non_empty("OTEL_LOG_LEVEL"));

        Self {
            service_name,
            otlp_endpoint,
            log_level,
            ..Default::default()
        }
    }

    /// Filter directive [init](crate::init) applies: `log_level`, else `RUST_LOG`, else "info".
    pub fn resolved_filter(&self) -> String {
        self.resolved_filter_with(std::env::var("RUST_LOG").ok())
    }

    fn resolved_filter_with(&self, rust_log: Option<String>) -> String {
        self.log_level
            .clone()
            .or_else(|| rust_log.filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| "info".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lookup_defaults() {
        let config = ObservabilityConfig::from_lookup(|_| None);
        assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
        assert!(config.otlp_endpoint.is_none());
        assert!(config.log_level.is_none());
        assert!(config.enable_console);
    }

    #[test]
    fn qabot_log_wins_over_otel_log_level() {
        let config = ObservabilityConfig::from_lookup(|k| match k {
            "QABOT_LOG" => Some("debug".into()),
            "OTEL_LOG_LEVEL" => Some("warn".into()),
            _ => None,
        });
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn resolved_filter_falls_back_to_rust_log_then_info() {
        let unset = ObservabilityConfig::from_lookup(|_| None);
        assert_eq!(unset.resolved_filter_with(Some("warn".into())), "warn");
        assert_eq!(unset.resolved_filter_with(Some(" ".into())), "info");
        assert_eq!(unset.resolved_filter_with(None), "info");

        let otel = ObservabilityConfig::from_lookup(|k| (k == "OTEL_LOG_LEVEL").then(|| "error".to_string()));
        assert_eq!(otel.resolved_filter_with(Some("warn".into())), "error");
    }

    #[test]
    fn blank_endpoint_disables_export() {
        let config = ObservabilityConfig::from_lookup(|k| {
            (k == "OTEL_EXPORTER_OTLP_ENDPOINT").then(|| " ".to_string())
        });
        assert!(config.otlp_endpoint.is_none());
    }

    #[test]
    fn builders_chain() {
        let sink: LogSink = Arc::new(|_| {});
        let config = ObservabilityConfig::new("qabot-test")
            .with_version("1.0")
            .with_console(false)
            .with_log_level("warn")
            .with_log_sink(sink);
        assert_eq!(config.service_name, "qabot-test");
        assert!(!config.enable_console);
        assert!(format!("{:?}", config).contains("Some(LogSink)"));
    }
}
