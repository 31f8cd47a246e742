//! TUI spacing and sizing constants.

/// Horizontal padding in characters (each side).
pub const HORIZONTAL_PADDING: u16 = 2;

/// Left indent for indented content (two spaces).
pub const LEFT_PADDING: &str = "  ";

/// Blank lines between message blocks.
pub const MESSAGE_SPACING_LINES: usize = 1;

/// Maximum consecutive empty lines allowed (avoids huge vertical gaps).
pub const MAX_CONSECUTIVE_EMPTY_LINES: usize = 2;

/// Lines retained on the logs screen before the oldest are dropped.
pub const MAX_LOG_LINES: usize = 2000;

/// Characters of the originating question shown in a reply tag.
pub const REPLY_TAG_QUESTION_WIDTH: usize = 40;

/// How long a transient status (e.g. "Copied") stays in the header.
pub const STATUS_TTL_SECS: u64 = 3;

/// Columns a tab expands to in message text.
pub const TAB_WIDTH: usize = 4;
