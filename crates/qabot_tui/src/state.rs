//! Chat state: message list, input buffer, scroll, theme.
//!
//! [ChatState] holds everything the view needs to render and is owned by the
//! UI thread. The `render_*` methods are the only way messages enter the list:
//! they stamp the message with the injected [Clock], append it, and pin the
//! view to the newest entry.

use std::time::{Duration, Instant};

use qabot_core::{Clock, Message, ReplyTag, system_clock};

use crate::theme::{Appearance, Palette};
use crate::utils::{MAX_LOG_LINES, STATUS_TTL_SECS};

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Chat,
    Logs,
}

pub struct ChatState {
    /// Display list, oldest first.
    pub messages: Vec<Message>,
    pub input_buffer: String,
    /// Byte offset of the cursor within input_buffer (0..=len).
    pub input_cursor: usize,
    /// Vertical scroll offset (number of lines scrolled up from the bottom).
    pub scroll: usize,
    /// When true, keep scroll at bottom on new content; false once the user scrolls up.
    pub auto_scroll: bool,
    pub palette: Palette,
    /// Transient header status (e.g. "Copied answer"); empty means show the request status.
    pub status: String,
    pub status_set_at: Option<Instant>,
    /// Outstanding requests, mirrored from the controller for the header.
    pub pending: usize,
    /// Incremented each run-loop iteration.
    pub frame_count: u64,
    /// When true, next draw should run; cleared after draw.
    pub needs_redraw: bool,
    /// Cached line list; invalidated on append and resize.
    pub cached_lines: Vec<ratatui::text::Line<'static>>,
    pub cache_dirty: bool,
    /// Width cached_lines were built for.
    pub cached_width: usize,
    pub screen: Screen,
    /// Log lines for the logs screen. Newest at end.
    pub log_lines: Vec<String>,
    /// Scroll offset for the logs screen (lines scrolled up).
    pub log_scroll: usize,
    clock: Clock,
}

impl std::fmt::Debug for ChatState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatState")
            .field("messages", &self.messages.len())
            .field("input_buffer", &self.input_buffer)
            .field("scroll", &self.scroll)
            .field("pending", &self.pending)
            .field("screen", &self.screen)
            .finish_non_exhaustive()
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            input_buffer: String::new(),
            input_cursor: 0,
            scroll: 0,
            auto_scroll: true,
            palette: Palette::dark(),
            status: String::new(),
            status_set_at: None,
            pending: 0,
            frame_count: 0,
            needs_redraw: true,
            cached_lines: Vec::new(),
            cache_dirty: true,
            cached_width: 0,
            screen: Screen::Chat,
            log_lines: Vec::new(),
            log_scroll: 0,
            clock: system_clock(),
        }
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appearance(appearance: Appearance) -> Self {
        Self {
            palette: Palette::for_appearance(appearance),
            ..Self::default()
        }
    }

    /// Replace the clock used to timestamp messages.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Append the user's message and scroll to it.
    pub fn render_user_message(&mut self, text: impl Into<String>) {
        let msg = Message::user(text, (self.clock)());
        self.append(msg);
    }

    /// Append a bot message. `text` is split into paragraphs on `'\n'`; a
    /// non-empty `source` adds a "Source: …" line after the answer.
    pub fn render_bot_message(&mut self, text: impl Into<String>, source: Option<String>) {
        self.render_bot_reply(text, source, None);
    }

    /// [render_bot_message](Self::render_bot_message) with an optional reply tag
    /// for answers that arrived after a newer question was sent.
    pub fn render_bot_reply(&mut self, text: impl Into<String>, source: Option<String>, reply_to: Option<ReplyTag>) {
        let msg = Message::bot(text, source, (self.clock)()).with_reply_tag(reply_to);
        self.append(msg);
    }

    /// Render the fallback bot message for a failed request.
    pub fn render_bot_failure(&mut self, reply_to: Option<ReplyTag>) {
        let msg = Message::failure((self.clock)()).with_reply_tag(reply_to);
        self.append(msg);
    }

    fn append(&mut self, msg: Message) {
        self.messages.push(msg);
        self.scroll = 0;
        self.auto_scroll = true;
        self.cache_dirty = true;
        self.needs_redraw = true;
    }

    /// Text of the newest bot message, for copying.
    pub fn last_bot_answer(&self) -> Option<&str> {
        self.messages.iter().rev().find(|m| m.is_bot()).map(|m| m.text.as_str())
    }

    /// Header status: a fresh transient status wins, then the request state.
    pub fn header_status(&self) -> String {
        if !self.status.is_empty() {
            return self.status.clone();
        }
        match self.pending {
            0 => "Ready".to_string(),
            1 => "Waiting for 1 reply".to_string(),
            n => format!("Waiting for {} replies", n),
        }
    }

    /// Show a transient status in the header; cleared by [expire_status](Self::expire_status).
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_set_at = Some(Instant::now());
        self.needs_redraw = true;
    }

    /// Clear the transient status once it is older than the TTL.
    pub fn expire_status(&mut self) {
        if let Some(at) = self.status_set_at
            && at.elapsed() >= Duration::from_secs(STATUS_TTL_SECS)
        {
            self.status.clear();
            self.status_set_at = None;
            self.needs_redraw = true;
        }
    }

    pub fn set_pending(&mut self, pending: usize) {
        if self.pending != pending {
            self.pending = pending;
            self.needs_redraw = true;
        }
    }

    /// Input buffer: insert character at cursor.
    pub fn input_insert(&mut self, c: char) {
        self.input_buffer.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
        self.needs_redraw = true;
    }

    /// Input buffer: delete character before cursor (UTF-8 safe).
    pub fn input_backspace(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let start = self.prev_boundary();
        self.input_buffer.drain(start..self.input_cursor);
        self.input_cursor = start;
        self.needs_redraw = true;
    }

    /// Input buffer: delete character at cursor (forward delete, UTF-8 safe).
    pub fn input_delete(&mut self) {
        if self.input_cursor >= self.input_buffer.len() {
            return;
        }
        let end = self.next_boundary();
        self.input_buffer.drain(self.input_cursor..end);
        self.needs_redraw = true;
    }

    pub fn input_cursor_left(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        self.input_cursor = self.prev_boundary();
        self.needs_redraw = true;
    }

    pub fn input_cursor_right(&mut self) {
        if self.input_cursor >= self.input_buffer.len() {
            return;
        }
        self.input_cursor = self.next_boundary();
        self.needs_redraw = true;
    }

    fn prev_boundary(&self) -> usize {
        let mut start = self.input_cursor - 1;
        while start > 0 && !self.input_buffer.is_char_boundary(start) {
            start -= 1;
        }
        start
    }

    fn next_boundary(&self) -> usize {
        let mut end = self.input_cursor + 1;
        while end < self.input_buffer.len() && !self.input_buffer.is_char_boundary(end) {
            end += 1;
        }
        end
    }

    pub fn input_cursor_home(&mut self) {
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Cursor to end of input; if empty, jump back to the newest message.
    pub fn input_cursor_end(&mut self) {
        self.input_cursor = self.input_buffer.len();
        if self.input_buffer.is_empty() {
            self.auto_scroll = true;
            self.scroll = 0;
        }
        self.needs_redraw = true;
    }

    /// Clear entire input buffer (Ctrl+U, and after a send).
    pub fn input_clear_line(&mut self) {
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Delete from cursor to end of line (Ctrl+K).
    pub fn input_kill_to_end(&mut self) {
        self.input_buffer.truncate(self.input_cursor);
        self.needs_redraw = true;
    }

    /// Scroll up (increase offset); disables auto_scroll.
    pub fn scroll_up(&mut self, delta: usize) {
        self.auto_scroll = false;
        self.scroll = self.scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    /// Scroll down (decrease offset); re-enables auto_scroll at the bottom.
    pub fn scroll_down(&mut self, delta: usize) {
        self.scroll = self.scroll.saturating_sub(delta);
        if self.scroll == 0 {
            self.auto_scroll = true;
        }
        self.needs_redraw = true;
    }

    /// Append a line to the logs buffer. Drops oldest if over capacity.
    pub fn push_log_line(&mut self, line: String) {
        self.log_lines.push(line);
        if self.log_lines.len() > MAX_LOG_LINES {
            self.log_lines.drain(0..self.log_lines.len() - MAX_LOG_LINES);
        }
        if self.screen == Screen::Logs {
            self.needs_redraw = true;
        }
    }

    pub fn log_scroll_up(&mut self, delta: usize) {
        self.log_scroll = self.log_scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    pub fn log_scroll_down(&mut self, delta: usize) {
        self.log_scroll = self.log_scroll.saturating_sub(delta);
        self.needs_redraw = true;
    }

    /// Ctrl+D: switch between chat and logs.
    pub fn toggle_logs(&mut self) {
        self.screen = match self.screen {
            Screen::Chat => Screen::Logs,
            Screen::Logs => Screen::Chat,
        };
        self.needs_redraw = true;
    }
}
