//! Split the terminal area into header, body, and footer regions.

use ratatui::layout::Rect;

/// Fixed height for the header (title line + border).
pub const HEADER_HEIGHT: u16 = 2;

/// Fixed height for the footer: input block (border + content + border) + shortcut line.
pub const FOOTER_HEIGHT: u16 = 4;

/// Regions for the chat layout: header, scrollable body, footer.
#[derive(Debug, Clone)]
pub struct MainSplits {
    pub header: Rect,
    /// Message list. May have zero height if the terminal is too small.
    pub body: Rect,
    /// Input box and shortcut hints.
    pub footer: Rect,
}

/// Split `area` into header (fixed top), body (scrollable middle), footer (fixed bottom).
pub fn main_splits(area: Rect) -> MainSplits {
    let height = area.height;
    let header_h = HEADER_HEIGHT.min(height);
    let footer_h = FOOTER_HEIGHT.min(height.saturating_sub(header_h));
    let body_h = height.saturating_sub(header_h + footer_h);

    MainSplits {
        header: Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: header_h,
        },
        body: Rect {
            x: area.x,
            y: area.y.saturating_add(header_h),
            width: area.width,
            height: body_h,
        },
        footer: Rect {
            x: area.x,
            y: area.y.saturating_add(header_h + body_h),
            width: area.width,
            height: footer_h,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_splits_assigns_regions() {
        let s = main_splits(Rect::new(0, 0, 80, 24));
        assert_eq!(s.header.height, 2);
        assert_eq!(s.footer.height, 4);
        assert_eq!(s.body.height, 18);
        assert_eq!(s.body.y, 2);
        assert_eq!(s.footer.y, 20);
    }

    #[test]
    fn main_splits_tiny_terminal() {
        let s = main_splits(Rect::new(0, 0, 80, 3));
        assert_eq!(s.body.height, 0);
        assert_eq!(s.header.height, HEADER_HEIGHT);
        assert_eq!(s.footer.height, 1);
    }

    #[test]
    fn main_splits_exact_minimum() {
        let s = main_splits(Rect::new(0, 0, 80, HEADER_HEIGHT + FOOTER_HEIGHT));
        assert_eq!(s.body.height, 0);
    }
}
