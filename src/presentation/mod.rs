//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the tab bar and adaptive panes using ratatui and
//! maps keyboard input onto navigation requests.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
