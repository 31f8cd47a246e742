//! Line builders for chat messages. Colors come from [crate::theme].
//!
//! - **user**: the user's question: accent border, `»` indicator, time label.
//! - **bot**: the server's answer: paragraphs, optional reply tag and source line.

pub mod bot;
pub mod user;

pub use bot::{BOT_INDICATOR, REPLY_TAG_ARROW, bot_message_lines};
pub use user::{USER_INDICATOR, user_message_lines};

#[cfg(test)]
pub(crate) fn line_text(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
