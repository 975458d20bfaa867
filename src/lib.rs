//! varlogic - Variadic Boolean Logic Library
//!
//! Evaluates logical operations over any number of boolean values and
//! compares results across operations or across value sets.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
