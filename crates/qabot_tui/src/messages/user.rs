//! User message rendering.
//!
//! - First line: left border + indicator (`»`) + time label + text start
//! - Continuation: same border, 2-space indent, wrapped text
//! - Colors: accent (border, indicator), text (body), text_muted (time)

use qabot_core::Message;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::layouts::{text_muted_style, text_style};
use crate::theme::Palette;
use crate::utils::{LEFT_PADDING, wrap_lines};

/// Indicator shown before the user's text (accent color).
pub const USER_INDICATOR: &str = "»";

const USER_LEFT_BORDER: &str = "│ ";

pub fn user_message_lines(msg: &Message, palette: &Palette, width: usize) -> Vec<Line<'static>> {
    let indent_len = LEFT_PADDING.width() + USER_LEFT_BORDER.width();
    let wrap_width = width.saturating_sub(indent_len).max(1);
    let wrapped = wrap_lines(&msg.text, wrap_width);
    let border_span = Span::styled(USER_LEFT_BORDER.to_string(), text_style(palette.accent));

    let mut first_line = vec![
        border_span.clone(),
        Span::styled(USER_INDICATOR.to_string(), text_style(palette.accent)),
        Span::raw(" "),
        Span::styled(format!("{} ", msg.time_label()), text_muted_style(palette.text_muted)),
    ];
    let Some((first, rest)) = wrapped.split_first() else {
        return vec![Line::from(first_line)];
    };
    first_line.push(Span::styled(first.clone(), text_style(palette.text)));

    let mut lines = Vec::with_capacity(wrapped.len());
    lines.push(Line::from(first_line));
    for seg in rest {
        lines.push(Line::from(vec![
            border_span.clone(),
            Span::raw(LEFT_PADDING),
            Span::styled(seg.clone(), text_style(palette.text)),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::line_text;
    use chrono::NaiveTime;

    fn msg(text: &str) -> Message {
        Message::user(text, NaiveTime::from_hms_opt(13, 5, 0).unwrap())
    }

    #[test]
    fn first_line_has_indicator_and_time() {
        let lines = user_message_lines(&msg("Hello world"), &Palette::dark(), 40);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "│ » 1:05 PM Hello world");
    }

    #[test]
    fn spacing_is_kept_as_typed() {
        let lines = user_message_lines(&msg("  two  spaces"), &Palette::dark(), 40);
        assert_eq!(line_text(&lines[0]), "│ » 1:05 PM   two  spaces");
    }

    #[test]
    fn wraps_long_text() {
        let lines = user_message_lines(&msg("one two three four five six seven"), &Palette::dark(), 12);
        assert!(lines.len() > 1);
        assert!(line_text(&lines[1]).starts_with("│   "));
    }

    #[test]
    fn emoji_text_renders() {
        let lines = user_message_lines(&msg("Hello 🌍🎉"), &Palette::dark(), 40);
        assert!(line_text(&lines[0]).contains("🌍🎉"));
    }

    #[test]
    fn empty_text_still_has_header_line() {
        let lines = user_message_lines(&msg(""), &Palette::dark(), 40);
        assert_eq!(lines.len(), 1);
    }
}
