//! Shared utilities for the qabot TUI.
//!
//! - **[constants]**: Spacing, padding, and sizing constants.
//! - **[layout]**: Rect padding, empty-line collapsing, scroll clamping.
//! - **[format]**: Wrapping and truncation for message text and status lines.

mod constants;
mod format;
mod layout;

pub use constants::*;
pub use format::{truncate_ellipsis, truncate_with_suffix, wrap_lines};
pub use layout::{collapse_empty_lines, horizontal_padding, scroll_with_buffer};
