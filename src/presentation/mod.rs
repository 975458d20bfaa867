//! Presentation layer handling table rendering and the terminal viewer.
//!
//! This module draws reports with ratatui, either off-screen for plain
//! text output or live in the interactive viewer, and handles viewer input.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
