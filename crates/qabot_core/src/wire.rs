//! JSON payloads for `POST /ask`.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Request body: `{"user_input": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub user_input: String,
}

impl AskRequest {
    pub fn new(user_input: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
        }
    }
}

/// Response body as it arrives. Both fields are optional on the wire; use
/// [AskResponse::into_reply] before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl AskResponse {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Fails with [CoreError::MissingAnswer] when `answer` is absent or null.
    pub fn into_reply(self) -> Result<AskReply> {
        let answer = self.answer.ok_or(CoreError::MissingAnswer)?;
        Ok(AskReply {
            answer,
            source: self.source,
        })
    }
}

/// A validated answer, ready to become a bot message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskReply {
    pub answer: String,
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_string(&AskRequest::new("Hello")).unwrap();
        assert_eq!(body, r#"{"user_input":"Hello"}"#);
    }

    #[test]
    fn response_with_source() {
        let resp = AskResponse::from_json(r#"{"answer":"Hi there","source":"greeting.txt"}"#).unwrap();
        let reply = resp.into_reply().unwrap();
        assert_eq!(reply.answer, "Hi there");
        assert_eq!(reply.source.as_deref(), Some("greeting.txt"));
    }

    #[test]
    fn response_without_source() {
        let reply = AskResponse::from_json(r#"{"answer":"ok"}"#)
            .unwrap()
            .into_reply()
            .unwrap();
        assert!(reply.source.is_none());
    }

    #[test]
    fn response_missing_answer_is_error() {
        let resp = AskResponse::from_json(r#"{"source":"a.pdf"}"#).unwrap();
        assert!(matches!(resp.into_reply(), Err(CoreError::MissingAnswer)));
    }

    #[test]
    fn response_null_answer_is_error() {
        let resp = AskResponse::from_json(r#"{"answer":null}"#).unwrap();
        assert!(matches!(resp.into_reply(), Err(CoreError::MissingAnswer)));
    }

    #[test]
    fn malformed_body_is_json_error() {
        assert!(matches!(AskResponse::from_json("<html>"), Err(CoreError::Json(_))));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let reply = AskResponse::from_json(r#"{"answer":"x","source":"s","score":0.9}"#)
            .unwrap()
            .into_reply()
            .unwrap();
        assert_eq!(reply.answer, "x");
    }
}
