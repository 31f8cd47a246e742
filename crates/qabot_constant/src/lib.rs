//! Shared constants for qabot.

pub mod app;
pub mod defaults;
