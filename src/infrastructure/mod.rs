//! Infrastructure layer providing file output.
//!
//! This module contains the JSON and CSV exporters used by the command
//! line and the interactive viewer.

pub mod persistence;

pub use persistence::*;
