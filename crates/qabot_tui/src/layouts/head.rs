//! Header strip: app title left, request status with a colored dot right.

use ratatui::Frame;
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::style::{background_style, border_style, success_style, text_muted_style, text_style, warning_style};
use crate::theme::Palette;
use crate::utils::horizontal_padding;

/// Title shown in the header.
pub const HEADER_TITLE: &str = qabot_constant::app::DISPLAY_NAME;

/// Header strip and its padded inner rect.
#[derive(Debug, Clone)]
pub struct HeadLayout {
    pub area: Rect,
    pub inner: Rect,
}

impl HeadLayout {
    pub fn new(area: Rect) -> Self {
        let inner = horizontal_padding(area);
        Self { area, inner }
    }
}

/// Title (bold) left, right-aligned status. Yellow dot while waiting, green when idle.
pub fn header_line(title: &str, status: &str, waiting: bool, palette: &Palette, width: u16) -> Line<'static> {
    let title_style = text_style(palette.text).add_modifier(Modifier::BOLD);
    let dot_style = if waiting {
        warning_style(palette.warning)
    } else {
        success_style(palette.success)
    };
    let left_len = title.width() + 1;
    let right_len = 2 + status.width();
    let gap = (width as usize).saturating_sub(left_len + right_len);
    Line::from(vec![
        Span::styled(title.to_string(), title_style),
        Span::raw(" ".repeat(gap)),
        Span::styled("● ".to_string(), dot_style),
        Span::styled(status.to_string(), text_muted_style(palette.text_muted)),
    ])
}

/// Draw the header: title line, then a bottom border.
pub fn render_header(frame: &mut Frame, area: Rect, palette: &Palette, status: &str, waiting: bool) {
    let layout = HeadLayout::new(area);
    let bg = background_style(palette.status_bar_background);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(palette.border))
        .style(bg);
    let line = header_line(HEADER_TITLE, status, waiting, palette, layout.inner.width);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line).style(bg), layout.inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn header_line_fills_width() {
        let palette = Palette::dark();
        let line = header_line("qabot", "Ready", false, &palette, 40);
        let s = text(&line);
        assert!(s.starts_with("qabot"));
        assert!(s.ends_with("● Ready"));
        assert_eq!(s.width(), 39);
    }

    #[test]
    fn header_line_waiting_uses_warning_dot() {
        let palette = Palette::dark();
        let line = header_line("qabot", "Waiting for 1 reply", true, &palette, 40);
        assert_eq!(line.spans[2].style, warning_style(palette.warning));
    }
}
