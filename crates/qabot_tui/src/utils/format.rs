//! Formatting helpers for TUI text (wrapping, truncation).

use unicode_width::UnicodeWidthStr;

use crate::utils::constants::TAB_WIDTH;

/// Truncate `s` to at most `max_width` characters, appending `suffix` when truncated.
/// Counts chars, not grapheme clusters.
pub fn truncate_with_suffix(s: &str, max_width: usize, suffix: &str) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let suffix_len = suffix.chars().count();
    if max_width <= suffix_len {
        return suffix.chars().take(max_width).collect();
    }
    let take = max_width - suffix_len;
    format!("{}{}", s.chars().take(take).collect::<String>(), suffix)
}

/// Truncate to `max_width` with "…" suffix when needed.
#[inline]
pub fn truncate_ellipsis(s: &str, max_width: usize) -> String {
    truncate_with_suffix(s, max_width, "…")
}

/// Word-wrap text to lines of at most `width` display columns (by word boundary).
///
/// Whitespace between words and leading indentation are kept as typed (tabs expand to
/// [TAB_WIDTH] spaces); the whitespace at a line break is dropped. Long words are pushed
/// as their own line. Returns empty vec for empty or whitespace-only input.
pub fn wrap_lines(s: &str, width: usize) -> Vec<String> {
    if width == 0 || s.trim().is_empty() {
        return Vec::new();
    }
    let text = s.replace('\t', &" ".repeat(TAB_WIDTH));
    let mut out = Vec::new();
    let mut line = String::new();
    let mut gap = "";
    for (is_space, run) in whitespace_runs(&text) {
        if is_space {
            gap = run;
            continue;
        }
        // a fresh line after a break starts at the word, not at the gap
        let gap = if line.is_empty() && !out.is_empty() { "" } else { gap };
        let word_w = run.width();
        if line.width() + gap.width() + word_w <= width {
            line.push_str(gap);
            line.push_str(run);
        } else {
            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            if word_w <= width {
                line = run.to_string();
            } else {
                out.push(run.to_string());
            }
        }
    }
    if !line.is_empty() {
        out.push(line);
    }
    out
}

/// Split `s` into alternating runs of whitespace and non-whitespace.
fn whitespace_runs(s: &str) -> Vec<(bool, &str)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (i, c) in s.char_indices() {
        let space = c.is_whitespace();
        if current.is_some_and(|cur| cur != space) {
            runs.push((!space, &s[start..i]));
            start = i;
        }
        current = Some(space);
    }
    if let Some(space) = current {
        runs.push((space, &s[start..]));
    }
    runs
}
