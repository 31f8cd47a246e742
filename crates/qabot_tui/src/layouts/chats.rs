//! Chat area layout: scrollable body region for the message list.

use ratatui::layout::Rect;

use crate::utils::{LEFT_PADDING, MESSAGE_SPACING_LINES, horizontal_padding, scroll_with_buffer};

/// Layout for the messages body: outer area and padded inner rect.
#[derive(Debug, Clone)]
pub struct ChatsLayout {
    pub area: Rect,
    /// Inner rect with horizontal padding for message content.
    pub inner: Rect,
}

impl ChatsLayout {
    pub fn new(area: Rect) -> Self {
        let inner = horizontal_padding(area);
        Self { area, inner }
    }
}

/// Scroll offset clamped so content does not scroll past the viewport.
pub fn chat_scroll_offset(offset: usize, content_height: usize, viewport_height: usize) -> usize {
    scroll_with_buffer(offset, content_height, viewport_height)
}

/// Blank lines inserted between messages.
pub const CHAT_MESSAGE_SPACING: usize = MESSAGE_SPACING_LINES;

/// Left indent for message continuation lines.
pub const CHAT_LEFT_INDENT: &str = LEFT_PADDING;
