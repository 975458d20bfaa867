use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered list of boolean inputs, one per variable.
pub type BooleanSequence = Vec<bool>;

/// The closed set of variadic logical operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Majority,
    Parity,
    AllEqual,
}

impl Operation {
    /// Canonical upper-case identifier, e.g. `ALL_EQUAL`.
    pub fn name(self) -> &'static str {
        match self {
            Operation::And => "AND",
            Operation::Or => "OR",
            Operation::Xor => "XOR",
            Operation::Nand => "NAND",
            Operation::Nor => "NOR",
            Operation::Majority => "MAJORITY",
            Operation::Parity => "PARITY",
            Operation::AllEqual => "ALL_EQUAL",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders a single value the way formulas and tables show it.
pub fn bool_symbol(value: bool) -> &'static str {
    if value { "T" } else { "F" }
}

/// Builds the `OP(T F T)` formula for an operation applied to `values`.
pub fn render_formula(operation: Operation, values: &[bool]) -> String {
    let symbols: Vec<&str> = values.iter().map(|v| bool_symbol(*v)).collect();
    format!("{}({})", operation.name(), symbols.join(" "))
}

/// The outcome of applying one operation to one input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub operation: Operation,
    pub inputs: BooleanSequence,
    pub result: bool,
}

impl EvaluationResult {
    pub fn formula(&self) -> String {
        render_formula(self.operation, &self.inputs)
    }
}

/// One row of a single-set comparison: the shared inputs under one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleSetRow {
    pub variable_values: BooleanSequence,
    pub operation: Operation,
    pub formula: String,
    pub result: bool,
}

impl From<EvaluationResult> for SingleSetRow {
    fn from(evaluation: EvaluationResult) -> Self {
        let formula = evaluation.formula();
        Self {
            variable_values: evaluation.inputs,
            operation: evaluation.operation,
            formula,
            result: evaluation.result,
        }
    }
}

/// One row of a multi-set comparison.
///
/// `set_index` is 1-based and counts only the sets that produced a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSetRow {
    pub set_index: usize,
    pub variable_values: BooleanSequence,
    pub formula: String,
    pub result: bool,
}

/// Registry entry handed to anything that lists the available operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationInfo {
    pub operation: Operation,
    pub description: String,
}
