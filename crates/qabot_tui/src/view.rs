//! TUI view: header (fixed top), scrollable chat body, input + shortcut (fixed bottom).

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::layouts::{
    CHAT_MESSAGE_SPACING, ChatsLayout, HEADER_TITLE, INPUT_ICON, background_style, block_for_input_bordered,
    border_style, chat_scroll_offset, main_splits, render_header, rgb_to_color, shortcut_inner_rect, shortcut_line,
    text_muted_style, text_style, warning_style,
};
use crate::messages::{bot_message_lines, user_message_lines};
use crate::state::{ChatState, Screen};
use crate::utils::collapse_empty_lines;

const INPUT_PLACEHOLDER: &str = "Ask a question…";

/// Draw the chat or the logs screen depending on `state.screen`.
pub fn draw(frame: &mut Frame, state: &mut ChatState, area: Rect) {
    match state.screen {
        Screen::Logs => draw_logs(frame, state, area),
        Screen::Chat => draw_chat(frame, state, area),
    }
}

/// Logs screen: scrollable list of tracing output. Ctrl+D or Esc to close.
fn draw_logs(frame: &mut Frame, state: &mut ChatState, area: Rect) {
    let palette = &state.palette;
    let block = Block::default()
        .title(" Logs (Ctrl+D to close) ")
        .borders(Borders::ALL)
        .border_style(border_style(palette.border))
        .style(background_style(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_height = state.log_lines.len();
    let viewport_height = inner.height as usize;
    let max_scroll = content_height.saturating_sub(viewport_height);
    state.log_scroll = state.log_scroll.min(max_scroll);
    // log_scroll counts up from the newest line
    let offset_from_top = max_scroll - state.log_scroll;

    let lines: Vec<Line> = state
        .log_lines
        .iter()
        .skip(offset_from_top)
        .take(viewport_height)
        .map(|s| Line::from(Span::styled(s.clone(), text_muted_style(palette.text_muted))))
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Build (or reuse) the rendered lines for every message.
fn message_lines(state: &mut ChatState, width: usize) -> Vec<Line<'static>> {
    if !state.cache_dirty && state.cached_width == width {
        return state.cached_lines.clone();
    }
    let palette = &state.palette;
    let mut lines = Vec::new();
    for msg in &state.messages {
        if !lines.is_empty() {
            lines.extend(std::iter::repeat_n(Line::from(""), CHAT_MESSAGE_SPACING));
        }
        if msg.is_user() {
            lines.extend(user_message_lines(msg, palette, width));
        } else {
            lines.extend(bot_message_lines(msg, palette, width));
        }
    }
    let lines = collapse_empty_lines(lines);
    state.cached_lines = lines.clone();
    state.cached_width = width;
    state.cache_dirty = false;
    lines
}

fn draw_chat(frame: &mut Frame, state: &mut ChatState, area: Rect) {
    let splits = main_splits(area);

    let status = state.header_status();
    render_header(frame, splits.header, &state.palette, &status, state.pending > 0);

    // ---- Body: scrollable chat ----
    let chat = ChatsLayout::new(splits.body);
    let width = chat.inner.width.saturating_sub(1) as usize;
    let viewport_height = chat.inner.height as usize;

    let mut all_lines = message_lines(state, width);
    let palette = &state.palette;

    if state.pending > 0 {
        if !all_lines.is_empty() {
            all_lines.push(Line::from(""));
        }
        let dots = ["·  ", "·· ", "···"][(state.frame_count / 3 % 3) as usize];
        all_lines.push(Line::from(Span::styled(
            format!("{} waiting for reply", dots),
            warning_style(palette.warning),
        )));
    }

    let content_height = all_lines.len();
    // state.scroll is lines scrolled up from the bottom (0 = newest visible)
    let max_scroll = chat_scroll_offset(usize::MAX, content_height, viewport_height);
    state.scroll = state.scroll.min(max_scroll);

    let offset_from_top = max_scroll - state.scroll;
    let visible: Vec<Line> = all_lines.into_iter().skip(offset_from_top).take(viewport_height).collect();

    if state.messages.is_empty() && state.pending == 0 {
        let welcome = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(HEADER_TITLE.to_string(), text_style(palette.text))),
            Line::from(""),
            Line::from(Span::styled(
                "Ask a question about your documents.".to_string(),
                text_muted_style(palette.text_muted),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(welcome, chat.inner);
    } else {
        frame.render_widget(Paragraph::new(visible), chat.inner);
    }

    if content_height > viewport_height && viewport_height > 0 {
        draw_scrollbar(frame, state, chat.inner, content_height, offset_from_top, max_scroll);
    }

    // ---- Footer: input block + shortcut ----
    let input_h = 3u16.min(splits.footer.height);
    let input_rect = Rect { height: input_h, ..splits.footer };
    let shortcut_rect = Rect {
        y: splits.footer.y + input_h,
        height: splits.footer.height - input_h,
        ..splits.footer
    };

    let palette = &state.palette;
    let block = block_for_input_bordered(palette, true);
    let inner = block.inner(input_rect);
    frame.render_widget(block, input_rect);

    let (icon_style, content_style, content) = if state.input_buffer.is_empty() {
        (
            text_style(palette.accent),
            text_style(palette.text_placeholder),
            INPUT_PLACEHOLDER.to_string(),
        )
    } else {
        (text_style(palette.success), text_style(palette.text), state.input_buffer.clone())
    };
    let input_line = Line::from(vec![
        Span::styled(INPUT_ICON.to_string(), icon_style),
        Span::styled(content, content_style),
    ]);
    frame.render_widget(Paragraph::new(input_line), inner);

    let before_cursor = &state.input_buffer[..state.input_cursor.min(state.input_buffer.len())];
    let cursor_col = (inner.x + INPUT_ICON.width() as u16 + before_cursor.width() as u16).min(inner.x + inner.width);
    frame.set_cursor_position((cursor_col, inner.y));

    frame.render_widget(
        Paragraph::new(shortcut_line(palette, !state.input_buffer.is_empty())),
        shortcut_inner_rect(shortcut_rect),
    );
}

/// One-column scrollbar on the right edge of the chat body.
fn draw_scrollbar(
    frame: &mut Frame,
    state: &ChatState,
    area: Rect,
    content_height: usize,
    offset_from_top: usize,
    max_scroll: usize,
) {
    let viewport_height = area.height as usize;
    let thumb_height = ((viewport_height * viewport_height).div_ceil(content_height.max(1)) as u16).max(1);
    let scroll_ratio = if max_scroll == 0 {
        1.0
    } else {
        offset_from_top as f64 / max_scroll as f64
    };
    let thumb_y = (scroll_ratio * (area.height.saturating_sub(thumb_height)) as f64).round() as u16;
    let track = Rect {
        x: area.x + area.width.saturating_sub(1),
        y: area.y,
        width: 1,
        height: area.height,
    };
    let thumb = Rect {
        y: track.y + thumb_y,
        height: thumb_height,
        ..track
    };
    frame.render_widget(
        Block::default().style(Style::default().bg(rgb_to_color(state.palette.scrollbar_track))),
        track,
    );
    frame.render_widget(
        Block::default().style(Style::default().bg(rgb_to_color(state.palette.scrollbar_thumb))),
        thumb,
    );
}
