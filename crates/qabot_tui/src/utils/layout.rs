//! Layout helpers for Rects and lines.

use ratatui::{layout::Rect, text::Line};

use crate::utils::constants::*;

/// Apply horizontal padding to a Rect (symmetric left/right).
#[inline]
pub fn horizontal_padding(area: Rect) -> Rect {
    horizontal_padding_with(area, HORIZONTAL_PADDING)
}

#[inline]
fn horizontal_padding_with(area: Rect, pad: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(pad),
        y: area.y,
        width: area.width.saturating_sub(pad.saturating_mul(2)),
        height: area.height,
    }
}

/// Collapse runs of empty lines to at most [MAX_CONSECUTIVE_EMPTY_LINES].
pub fn collapse_empty_lines(lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    let mut consecutive_empty = 0;

    for line in lines {
        let empty = line.spans.iter().all(|s| s.content.trim().is_empty());
        if empty {
            consecutive_empty += 1;
            if consecutive_empty <= MAX_CONSECUTIVE_EMPTY_LINES {
                out.push(line);
            }
        } else {
            consecutive_empty = 0;
            out.push(line);
        }
    }
    out
}

/// Clamp a scroll offset so we never skip past the end of content.
/// Max offset is content_height - viewport_height so the last line can sit at the bottom.
pub fn scroll_with_buffer(offset: usize, content_height: usize, viewport_height: usize) -> usize {
    let max_offset = content_height.saturating_sub(viewport_height);
    offset.min(max_offset)
}
