use thiserror::Error;

/// Every failure the logic core can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogicError {
    /// A token in a boolean list is not one of the recognised truthy/falsy literals.
    #[error("Invalid boolean value '{token}' at position {position}{}", set_suffix(.set))]
    InvalidBooleanToken {
        token: String,
        /// 1-based index within its list.
        position: usize,
        /// 1-based index of the enclosing set when parsing several sets.
        set: Option<usize>,
    },

    /// An identifier reached the evaluator that the registry does not know.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("No values provided for single-set comparison")]
    EmptySingleSet,

    #[error("No non-empty variable sets provided")]
    EmptyBatch,

    /// User-supplied operation text did not name any operation.
    #[error("Invalid operation: {0}. Valid options: AND, OR, XOR, NAND, NOR, MAJORITY, PARITY, ALL_EQUAL")]
    MalformedOperationName(String),
}

fn set_suffix(set: &Option<usize>) -> String {
    match set {
        Some(index) => format!(" in set {}", index),
        None => String::new(),
    }
}

pub type LogicResult<T> = Result<T, LogicError>;
