//! Span helpers for HTTP calls

/// Create a span for an outbound HTTP request
///
/// Declares `http.status_code`, `http.duration_ms`, `error` and `error.message`
/// as empty fields so [record_duration] and [record_error] can fill them in.
///
/// ```rust
/// use qabot_observability::http_request_span;
///
/// let span = http_request_span!("POST", "http://127.0.0.1:5000/ask");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! http_request_span {
    ($method:expr, $url:expr) => {
        tracing::info_span!(
            "http.request",
            http.method = $method,
            url.full = $url,
            http.status_code = tracing::field::Empty,
            http.duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Record an error on the current span and log it at warn level.
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::warn!(error = %error, "request failed");
}

/// Record a duration in milliseconds on the current span.
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
