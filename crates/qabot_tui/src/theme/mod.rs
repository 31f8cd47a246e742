//! qabot theme: semantic color palette for the chat panel.
//!
//! ```ignore
//! use qabot_tui::theme::{Appearance, Palette};
//!
//! let palette = Palette::for_appearance(Appearance::Light);
//! let text = palette.text.tuple(); // (r, g, b) for ratatui
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::Palette;
pub use rgb::Rgb;
