//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]**: Split the screen into header, body, footer.
//! - **[style]**: Map palette [Rgb](crate::theme::Rgb) to ratatui styles.
//! - **[head]**: Header strip with title and request status.
//! - **[chats]**: Chat area layout and scroll/indent helpers.
//! - **[input]**: Input bar block.
//! - **[shortcut]**: Shortcut hint line (below input).

mod chats;
mod head;
mod input;
mod shortcut;
mod split;
mod style;

pub use chats::{CHAT_LEFT_INDENT, CHAT_MESSAGE_SPACING, ChatsLayout, chat_scroll_offset};
pub use head::{HEADER_TITLE, HeadLayout, header_line, render_header};
pub use input::{INPUT_ICON, INPUT_PADDING_H, block_for_input_bordered};
pub use shortcut::{shortcut_inner_rect, shortcut_line};
pub use split::{FOOTER_HEIGHT, HEADER_HEIGHT, MainSplits, main_splits};
pub use style::{
    background_style, border_focused_style, border_style, danger_style, rgb_to_color,
    success_style, text_muted_style, text_style, warning_style,
};
