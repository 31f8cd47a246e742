//! Palette: the semantic color roles the chat panel draws with.

use super::Appearance;
use super::rgb::Rgb;

/// One palette per appearance. Fields are roles, not literal colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    // --- Surfaces
    pub background: Rgb,
    pub status_bar_background: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_focused: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_placeholder: Rgb,
    pub text_disabled: Rgb,

    // --- Semantic
    /// User indicator, bot indicator, input icon.
    pub accent: Rgb,
    pub danger: Rgb,
    pub success: Rgb,
    pub warning: Rgb,

    // --- Scrollbar
    pub scrollbar_thumb: Rgb,
    pub scrollbar_track: Rgb,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Rgb(8, 8, 12),
            status_bar_background: Rgb(16, 17, 24),
            border: Rgb(28, 30, 42),
            border_focused: Rgb(99, 148, 255),
            text: Rgb(200, 210, 245),
            text_muted: Rgb(70, 78, 110),
            text_placeholder: Rgb(70, 78, 110),
            text_disabled: Rgb(61, 65, 102),
            accent: Rgb(99, 148, 255),
            danger: Rgb(255, 100, 120),
            success: Rgb(120, 220, 120),
            warning: Rgb(240, 185, 100),
            scrollbar_thumb: Rgb(86, 95, 137),
            scrollbar_track: Rgb(17, 17, 26),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            status_bar_background: Rgb(255, 255, 255),
            border: Rgb(229, 229, 229),
            border_focused: Rgb(122, 162, 247),
            text: Rgb(26, 27, 38),
            text_muted: Rgb(86, 95, 137),
            text_placeholder: Rgb(86, 95, 137),
            text_disabled: Rgb(161, 161, 170),
            accent: Rgb(122, 162, 247),
            danger: Rgb(247, 118, 142),
            success: Rgb(158, 206, 106),
            warning: Rgb(224, 175, 104),
            scrollbar_thumb: Rgb(161, 161, 170),
            scrollbar_track: Rgb(248, 248, 248),
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }
}
