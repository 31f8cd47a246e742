//! Shortcut hint line below the input, muted and context-aware.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use super::input::INPUT_PADDING_H;
use super::style::text_muted_style;
use crate::theme::Palette;

/// Horizontal inset so hints align with the input content (border + padding).
const SHORTCUT_INSET_H: u16 = 1 + INPUT_PADDING_H;

pub fn shortcut_inner_rect(area: Rect) -> Rect {
    let inset = SHORTCUT_INSET_H;
    Rect {
        x: area.x.saturating_add(inset),
        y: area.y,
        width: area.width.saturating_sub(inset.saturating_mul(2)),
        height: area.height,
    }
}

/// Hints for the footer:
/// - input has text: "Enter: send  ·  Ctrl+U: clear  ·  Ctrl+C: quit"
/// - input empty: scroll, copy, logs, quit
pub fn shortcut_line(palette: &Palette, input_has_text: bool) -> Line<'static> {
    let hint = if input_has_text {
        "Enter: send  ·  Ctrl+U: clear  ·  Ctrl+C: quit"
    } else {
        "↑↓: scroll  ·  Ctrl+Y: copy answer  ·  Ctrl+D: logs  ·  Ctrl+C: quit"
    };
    Line::from(vec![Span::styled(hint.to_string(), text_muted_style(palette.text_muted))])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_inner_rect_zero_width() {
        let inner = shortcut_inner_rect(Rect::new(0, 0, 0, 1));
        assert_eq!(inner.width, 0);
    }

    #[test]
    fn shortcut_line_typing() {
        let line = shortcut_line(&Palette::dark(), true);
        assert!(line.spans.iter().any(|s| s.content.contains("Enter")));
    }

    #[test]
    fn shortcut_line_idle() {
        let line = shortcut_line(&Palette::dark(), false);
        assert!(line.spans.iter().any(|s| s.content.contains("scroll")));
    }
}
