//! `/ask` client: one POST, one JSON reply.

use std::time::Instant;

use async_trait::async_trait;
use qabot_core::{AskReply, AskRequest, AskResponse};
use qabot_observability::{http_request_span, record_duration, record_error};
use reqwest::{Client, Url};
use tracing::{Instrument, debug};

use crate::config::ClientConfig;
use crate::error::{AskError, Result};

/// Anything that can answer a question. The controller only sees this trait.
#[async_trait]
pub trait AskClient: Send + Sync {
    async fn ask(&self, request: AskRequest) -> Result<AskReply>;
}

/// reqwest-backed [AskClient].
#[derive(Clone, Debug)]
pub struct HttpAskClient {
    client: Client,
    url: Url,
    config: ClientConfig,
}

impl HttpAskClient {
    /// Build a client for `config`. Fails on an unparsable base URL.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let url = Url::parse(&config.ask_url())
            .map_err(|e| AskError::Config(format!("invalid server URL '{}': {}", config.base_url, e)))?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, url, config })
    }

    /// Create client from environment (see [ClientConfig::from_env]).
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Endpoint this client posts to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn post(&self, request: &AskRequest) -> Result<AskReply> {
        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::Span::current().record("http.status_code", status.as_u16());
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AskError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply = AskResponse::from_json(&body)?.into_reply()?;
        Ok(reply)
    }
}

#[async_trait]
impl AskClient for HttpAskClient {
    async fn ask(&self, request: AskRequest) -> Result<AskReply> {
        let span = http_request_span!("POST", self.url.as_str());
        async {
            debug!(
                target: "qabot.trace",
                chars = request.user_input.chars().count(),
                "sending question"
            );
            let started = Instant::now();
            let result = self.post(&request).await;
            record_duration("http.duration_ms", started.elapsed());
            match &result {
                Ok(reply) => debug!(
                    target: "qabot.trace",
                    has_source = reply.source.is_some(),
                    "answer received"
                ),
                Err(e) => record_error(e),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_bad_url() {
        let err = HttpAskClient::new(ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, AskError::Config(_)));
    }

    #[test]
    fn new_builds_ask_url() {
        let client = HttpAskClient::new(ClientConfig::new("http://127.0.0.1:5000/")).unwrap();
        assert_eq!(client.url().as_str(), "http://127.0.0.1:5000/ask");
    }
}
