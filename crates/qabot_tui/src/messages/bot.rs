//! Bot message rendering.
//!
//! Layout, top to bottom:
//! - optional reply tag (`↳ re #3: what is…`) when the answer arrived after a newer question
//! - one block per `'\n'`-separated paragraph; the first row carries `▸` and the time label,
//!   an empty paragraph is an empty row
//! - `Source: …` in muted style directly after the answer when a source is present
//!
//! Text is drawn as-is: no markup is interpreted.

use qabot_core::Message;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::layouts::{danger_style, text_muted_style, text_style};
use crate::theme::Palette;
use crate::utils::{LEFT_PADDING, REPLY_TAG_QUESTION_WIDTH, truncate_ellipsis, wrap_lines};

/// Indicator shown before the answer (accent color).
pub const BOT_INDICATOR: &str = "▸";

/// Prefix of the reply-tag line.
pub const REPLY_TAG_ARROW: &str = "↳";

const BOT_LEFT_BORDER: &str = "│ ";

pub fn bot_message_lines(msg: &Message, palette: &Palette, width: usize) -> Vec<Line<'static>> {
    let muted = text_muted_style(palette.text_muted);
    let body = if msg.failed {
        danger_style(palette.danger)
    } else {
        text_style(palette.text)
    };
    let border_span = Span::styled(BOT_LEFT_BORDER.to_string(), muted);
    let indent_len = LEFT_PADDING.width() + BOT_LEFT_BORDER.width();
    let wrap_width = width.saturating_sub(indent_len).max(1);

    let mut lines = Vec::new();

    if let Some(tag) = &msg.reply_to {
        let question = truncate_ellipsis(tag.question.trim(), REPLY_TAG_QUESTION_WIDTH);
        lines.push(Line::from(vec![
            border_span.clone(),
            Span::styled(format!("{} re {}: {}", REPLY_TAG_ARROW, tag.request, question), muted),
        ]));
    }

    let mut prefix = Some(vec![
        Span::styled(BOT_INDICATOR.to_string(), text_style(palette.accent)),
        Span::raw(" "),
        Span::styled(format!("{} ", msg.time_label()), muted),
    ]);

    for paragraph in msg.paragraphs() {
        let wrapped = wrap_lines(paragraph, wrap_width);
        if wrapped.is_empty() {
            let mut spans = vec![border_span.clone()];
            if let Some(p) = prefix.take() {
                spans.extend(p);
            }
            lines.push(Line::from(spans));
            continue;
        }
        for seg in wrapped {
            let mut spans = vec![border_span.clone()];
            match prefix.take() {
                Some(p) => spans.extend(p),
                None => spans.push(Span::raw(LEFT_PADDING)),
            }
            spans.push(Span::styled(seg, body));
            lines.push(Line::from(spans));
        }
    }

    if let Some(source) = msg.source_line() {
        for seg in wrap_lines(&source, wrap_width) {
            lines.push(Line::from(vec![
                border_span.clone(),
                Span::raw(LEFT_PADDING),
                Span::styled(seg, muted),
            ]));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::line_text;
    use chrono::NaiveTime;
    use qabot_core::{ReplyTag, RequestId};

    fn at() -> NaiveTime {
        NaiveTime::from_hms_opt(0, 0, 0).unwrap()
    }

    fn texts(msg: &Message, width: usize) -> Vec<String> {
        bot_message_lines(msg, &Palette::dark(), width)
            .iter()
            .map(line_text)
            .collect()
    }

    #[test]
    fn single_paragraph_with_source() {
        let msg = Message::bot("Hi there", Some("greeting.txt".into()), at());
        assert_eq!(
            texts(&msg, 60),
            vec!["│ ▸ 12:00 AM Hi there", "│   Source: greeting.txt"]
        );
    }

    #[test]
    fn paragraphs_render_in_order() {
        let msg = Message::bot("line1\nline2", None, at());
        assert_eq!(texts(&msg, 60), vec!["│ ▸ 12:00 AM line1", "│   line2"]);
    }

    #[test]
    fn empty_paragraph_is_empty_row() {
        let msg = Message::bot("a\n\nb", None, at());
        let out = texts(&msg, 60);
        assert_eq!(out.len(), 3);
        assert_eq!(out[1], "│ ");
    }

    #[test]
    fn empty_source_is_omitted() {
        let msg = Message::bot("answer", Some(String::new()), at());
        assert!(!texts(&msg, 60).iter().any(|l| l.contains("Source")));
    }

    #[test]
    fn markup_is_literal() {
        let msg = Message::bot("<b>x</b>", None, at());
        assert!(texts(&msg, 60)[0].ends_with("<b>x</b>"));
    }

    #[test]
    fn reply_tag_line_comes_first() {
        let msg = Message::bot("late", None, at())
            .with_reply_tag(Some(ReplyTag::new(RequestId(1), "first question")));
        let out = texts(&msg, 60);
        assert_eq!(out[0], "│ ↳ re #1: first question");
        assert!(out[1].contains(BOT_INDICATOR));
    }

    #[test]
    fn failed_reply_uses_danger_style() {
        let palette = Palette::dark();
        let msg = Message::failure(at());
        let lines = bot_message_lines(&msg, &palette, 60);
        let last = lines[0].spans.last().unwrap();
        assert_eq!(last.style, danger_style(palette.danger));
    }

    #[test]
    fn server_answer_matching_fallback_text_is_plain() {
        let palette = Palette::dark();
        let msg = Message::bot(qabot_constant::defaults::FALLBACK_REPLY, None, at());
        let lines = bot_message_lines(&msg, &palette, 60);
        let last = lines[0].spans.last().unwrap();
        assert_eq!(last.style, text_style(palette.text));
    }

    #[test]
    fn interior_whitespace_is_kept() {
        let msg = Message::bot("  indented    text\ttab", None, at());
        assert_eq!(texts(&msg, 60), vec!["│ ▸ 12:00 AM   indented    text    tab"]);
    }

    #[test]
    fn long_word_does_not_panic() {
        let msg = Message::bot("a".repeat(500), None, at());
        assert!(!texts(&msg, 20).is_empty());
    }
}
