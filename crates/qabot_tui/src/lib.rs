//! qabot-tui: terminal chat panel for qabot.
//!
//! [state] holds the rendered messages and input line (the message renderer),
//! [controller] turns a send action into a user message plus one `/ask` call,
//! [view] draws, [run] owns the terminal. Theming in `theme`, layout in `layouts`.

pub mod controller;
pub mod layouts;
pub mod messages;
pub mod run;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use controller::{ChatController, Reply};
pub use run::{Flow, handle_key, run_chat};
pub use state::{ChatState, Screen};
pub use theme::{Appearance, Palette};
pub use view::draw as draw_view;
