//! Domain layer: the operation registry, evaluator, input parser, and
//! comparison services. Nothing here performs I/O.

pub mod models;
pub mod registry;
pub mod evaluator;
pub mod parser;
pub mod services;
pub mod errors;

pub use models::*;
pub use registry::*;
pub use evaluator::*;
pub use parser::*;
pub use services::*;
pub use errors::*;
