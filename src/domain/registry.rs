//! The closed registry of logical operations.
//!
//! Every [`Operation`] has exactly one description here and exactly one rule
//! in [`super::evaluator`]. Adding an operation means adding a variant and
//! extending both exhaustive matches; there is no runtime registration.

use super::errors::{LogicError, LogicResult};
use super::models::{Operation, OperationInfo};

pub struct OperationRegistry;

impl OperationRegistry {
    const OPERATIONS: [Operation; 8] = [
        Operation::And,
        Operation::Or,
        Operation::Xor,
        Operation::Nand,
        Operation::Nor,
        Operation::Majority,
        Operation::Parity,
        Operation::AllEqual,
    ];

    /// All operations in registry order.
    pub fn all() -> [Operation; 8] {
        Self::OPERATIONS
    }

    pub fn description(operation: Operation) -> &'static str {
        match operation {
            Operation::And => "All values must be True",
            Operation::Or => "At least one value must be True",
            Operation::Xor => "Odd number of True values",
            Operation::Nand => "NOT(All values are True)",
            Operation::Nor => "NOT(Any value is True)",
            Operation::Majority => "More than half are True",
            Operation::Parity => "Odd number of True values (same as XOR)",
            Operation::AllEqual => "All values are the same",
        }
    }

    /// Resolves an exact canonical identifier such as `ALL_EQUAL`.
    ///
    /// No trimming or case folding happens here; user text goes through
    /// [`super::parser::InputParser::parse_operation`] instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use varlogic::domain::{Operation, OperationRegistry};
    ///
    /// assert_eq!(OperationRegistry::lookup("MAJORITY"), Ok(Operation::Majority));
    /// assert!(OperationRegistry::lookup("IMPLIES").is_err());
    /// ```
    pub fn lookup(identifier: &str) -> LogicResult<Operation> {
        Self::OPERATIONS
            .into_iter()
            .find(|op| op.name() == identifier)
            .ok_or_else(|| LogicError::UnsupportedOperation(identifier.to_string()))
    }

    pub fn list_operations() -> Vec<OperationInfo> {
        Self::OPERATIONS
            .into_iter()
            .map(|operation| OperationInfo {
                operation,
                description: Self::description(operation).to_string(),
            })
            .collect()
    }
}
