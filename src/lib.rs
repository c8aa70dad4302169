//! panestack - Adaptive Multi-Pane Navigation Library
//!
//! Per-tab back stacks and a cross-pane navigation state machine for
//! list/detail/extra layouts, with a terminal front-end built on ratatui.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
