//! Tracing layer that forwards formatted log lines to a [LogSink].

use std::fmt::Write;

use tracing::field::Visit;
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

/// Lines longer than this are cut and suffixed with the original length.
const MAX_LINE_LEN: usize = 8_000;

/// Collects `message` plus `key=value` pairs into one line.
struct LineVisitor {
    buf: String,
}

impl LineVisitor {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(128),
        }
    }

    fn sep(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.sep();
        if field.name() == "message" {
            self.buf.push_str(value);
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.sep();
        if field.name() == "message" {
            write!(self.buf, "{:?}", value).ok();
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }
}

/// Layer that sends each event as `"[LEVEL] target: message k=v"` to the sink.
#[derive(Clone)]
pub struct SinkLayer {
    sink: Option<LogSink>,
}

impl SinkLayer {
    pub fn new(sink: Option<LogSink>) -> Self {
        Self { sink }
    }
}

impl<S> Layer<S> for SinkLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let Some(sink) = &self.sink else {
            return;
        };
        let meta = event.metadata();
        let mut visitor = LineVisitor::new();
        event.record(&mut visitor);
        let line = if visitor.buf.is_empty() {
            format!("[{}] {}", meta.level(), meta.target())
        } else {
            format!("[{}] {}: {}", meta.level(), meta.target(), visitor.buf)
        };
        let line = if line.len() > MAX_LINE_LEN {
            let cut: String = line.chars().take(MAX_LINE_LEN).collect();
            format!("{}… ({} chars)", cut, line.len())
        } else {
            line
        };
        sink(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    fn capture<F: FnOnce()>(f: F) -> Vec<String> {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let out = Arc::clone(&lines);
        let sink: LogSink = Arc::new(move |line| out.lock().unwrap().push(line));
        let subscriber = tracing_subscriber::registry().with(SinkLayer::new(Some(sink)));
        tracing::subscriber::with_default(subscriber, f);
        let collected = lines.lock().unwrap().clone();
        collected
    }

    #[test]
    fn formats_level_target_message_and_fields() {
        let lines = capture(|| {
            tracing::warn!(target: "qabot.test", request = 3, "ask failed");
        });
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "[WARN] qabot.test: ask failed request=3");
    }

    #[test]
    fn string_fields_are_quoted() {
        let lines = capture(|| {
            tracing::info!(target: "qabot.test", url = "http://x/ask", "posting");
        });
        assert_eq!(lines[0], "[INFO] qabot.test: posting url=\"http://x/ask\"");
    }

    #[test]
    fn long_lines_are_truncated() {
        let lines = capture(|| {
            let big = "x".repeat(MAX_LINE_LEN * 2);
            tracing::info!(target: "t", "{}", big);
        });
        assert!(lines[0].ends_with("chars)"));
        assert!(lines[0].chars().count() < MAX_LINE_LEN + 32);
    }

    #[test]
    fn no_sink_is_silent() {
        let subscriber = tracing_subscriber::registry().with(SinkLayer::new(None));
        tracing::subscriber::with_default(subscriber, || tracing::info!("dropped"));
    }
}
