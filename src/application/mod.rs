//! Application layer turning requests into reports and managing viewer state.
//!
//! This module coordinates between the domain layer and the presentation
//! layer: it parses raw command text into requests, runs them through the
//! comparison services, and holds the state of the interactive viewer.

pub mod commands;
pub mod state;

pub use commands::*;
pub use state::*;
