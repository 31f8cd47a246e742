//! Chat message model.
//!
//! A [Message] is created when it is rendered and never changes afterwards.
//! Display order is insertion order.

use chrono::NaiveTime;
use qabot_constant::defaults::{FALLBACK_REPLY, SOURCE_PREFIX};
use serde::{Deserialize, Serialize};

use crate::clock::format_time;
use crate::request::RequestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Bot,
}

/// Marks a bot reply that resolved after a newer question was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyTag {
    pub request: RequestId,
    /// The question this reply answers.
    pub question: String,
}

impl ReplyTag {
    pub fn new(request: RequestId, question: impl Into<String>) -> Self {
        Self {
            request,
            question: question.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub timestamp: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<ReplyTag>,
    /// Set on the fallback message shown when a request failed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub failed: bool,
}

impl Message {
    pub fn user(text: impl Into<String>, timestamp: NaiveTime) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            timestamp,
            source: None,
            reply_to: None,
            failed: false,
        }
    }

    pub fn bot(text: impl Into<String>, source: Option<String>, timestamp: NaiveTime) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
            timestamp,
            source,
            reply_to: None,
            failed: false,
        }
    }

    /// The fixed fallback bot message for a request that failed. No source.
    pub fn failure(timestamp: NaiveTime) -> Self {
        Self {
            failed: true,
            ..Self::bot(FALLBACK_REPLY, None, timestamp)
        }
    }

    pub fn with_reply_tag(mut self, tag: Option<ReplyTag>) -> Self {
        self.reply_to = tag;
        self
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_bot(&self) -> bool {
        self.role == Role::Bot
    }

    /// Text split on `'\n'`. Empty pieces are kept so blank lines survive.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }

    /// `"Source: {source}"` when a non-empty source is attached.
    pub fn source_line(&self) -> Option<String> {
        self.source
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| format!("{}{}", SOURCE_PREFIX, s))
    }

    /// 12-hour label, e.g. `1:05 PM`.
    pub fn time_label(&self) -> String {
        format_time(&self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn paragraphs_split_on_newline_in_order() {
        let msg = Message::bot("line1\nline2", None, at(10, 0));
        assert_eq!(msg.paragraphs(), vec!["line1", "line2"]);
    }

    #[test]
    fn paragraphs_keep_empty_lines() {
        let msg = Message::bot("a\n\nb", None, at(10, 0));
        assert_eq!(msg.paragraphs(), vec!["a", "", "b"]);
    }

    #[test]
    fn paragraphs_do_not_interpret_markup() {
        let msg = Message::bot("<b>bold</b> *not md*", None, at(10, 0));
        assert_eq!(msg.paragraphs(), vec!["<b>bold</b> *not md*"]);
    }

    #[test]
    fn source_line_present() {
        let msg = Message::bot("answer", Some("doc.pdf".into()), at(10, 0));
        assert_eq!(msg.source_line().as_deref(), Some("Source: doc.pdf"));
    }

    #[test]
    fn source_line_absent_or_empty() {
        let none = Message::bot("answer", None, at(10, 0));
        let empty = Message::bot("answer", Some(String::new()), at(10, 0));
        assert!(none.source_line().is_none());
        assert!(empty.source_line().is_none());
    }

    #[test]
    fn time_label_uses_twelve_hour_clock() {
        let msg = Message::user("hi", at(13, 5));
        assert_eq!(msg.time_label(), "1:05 PM");
        assert!(msg.is_user());
        assert!(!msg.is_bot());
    }

    #[test]
    fn serializes_role_snake_case_and_skips_empty_fields() {
        let msg = Message::user("hi", at(9, 0));
        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["role"], "user");
        assert!(v.get("source").is_none());
        assert!(v.get("reply_to").is_none());
        assert!(v.get("failed").is_none());
    }

    #[test]
    fn failure_is_flagged_fallback_without_source() {
        let msg = Message::failure(at(9, 0));
        assert!(msg.is_bot());
        assert!(msg.failed);
        assert_eq!(msg.text, FALLBACK_REPLY);
        assert!(msg.source_line().is_none());
        assert_eq!(serde_json::to_value(&msg).unwrap()["failed"], true);
    }

    #[test]
    fn answer_with_fallback_text_is_not_a_failure() {
        let msg = Message::bot(FALLBACK_REPLY, None, at(9, 0));
        assert!(!msg.failed);
    }
}
