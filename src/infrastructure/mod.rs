//! Infrastructure layer providing external service integrations.
//!
//! This module contains configuration loading and session persistence.

pub mod config;
pub mod persistence;

pub use config::*;
pub use persistence::*;
