//! Application layer: the navigation core and the session state built on it.
//!
//! This module owns the per-tab back stacks, the navigator state machine,
//! the adaptive layout signals, and the front-end state that drives them.

pub mod stacks;
pub mod layout;
pub mod snapshot;
pub mod navigator;
pub mod panes;
pub mod state;

pub use stacks::*;
pub use layout::*;
pub use snapshot::*;
pub use navigator::*;
pub use panes::*;
pub use state::*;
