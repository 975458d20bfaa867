//! Evaluation rules for the variadic operations.

use super::errors::LogicResult;
use super::models::{EvaluationResult, Operation};
use super::registry::OperationRegistry;

/// Applies registry operations to boolean sequences of any length.
///
/// Every rule is total: empty and single-element inputs never fail.
///
/// # Examples
///
/// ```
/// use varlogic::domain::{Operation, OperationEvaluator};
///
/// assert!(OperationEvaluator::evaluate(Operation::Majority, &[true, false, true]));
/// assert!(OperationEvaluator::evaluate(Operation::And, &[]));
/// assert!(!OperationEvaluator::evaluate(Operation::Xor, &[true, true]));
/// ```
pub struct OperationEvaluator;

impl OperationEvaluator {
    pub fn evaluate(operation: Operation, values: &[bool]) -> bool {
        let n = values.len();
        let k = values.iter().filter(|v| **v).count();

        match operation {
            Operation::And => k == n,
            Operation::Or => k > 0,
            Operation::Nand => k != n,
            Operation::Nor => k == 0,
            Operation::Xor | Operation::Parity => k % 2 == 1,
            // k > n / 2 over the reals; false when n == 0
            Operation::Majority => 2 * k > n,
            Operation::AllEqual => match values.first() {
                Some(first) => values.iter().all(|v| v == first),
                None => true,
            },
        }
    }

    /// Evaluates by canonical identifier, failing for names outside the registry.
    pub fn evaluate_identifier(identifier: &str, values: &[bool]) -> LogicResult<bool> {
        let operation = OperationRegistry::lookup(identifier)?;
        Ok(Self::evaluate(operation, values))
    }

    pub fn evaluate_detailed(operation: Operation, values: &[bool]) -> EvaluationResult {
        let result = Self::evaluate(operation, values);
        log::debug!(
            "{} over {} value(s) -> {}",
            operation,
            values.len(),
            result
        );
        EvaluationResult {
            operation,
            inputs: values.to_vec(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::LogicError;

    /// Every boolean sequence of length 0..=max_len.
    fn all_sequences(max_len: usize) -> Vec<Vec<bool>> {
        let mut sequences = Vec::new();
        for len in 0..=max_len {
            for bits in 0u32..(1 << len) {
                sequences.push((0..len).map(|i| bits & (1 << i) != 0).collect());
            }
        }
        sequences
    }

    #[test]
    fn test_empty_sequence_identities() {
        assert!(OperationEvaluator::evaluate(Operation::And, &[]));
        assert!(!OperationEvaluator::evaluate(Operation::Or, &[]));
        assert!(!OperationEvaluator::evaluate(Operation::Nand, &[]));
        assert!(OperationEvaluator::evaluate(Operation::Nor, &[]));
        assert!(!OperationEvaluator::evaluate(Operation::Xor, &[]));
        assert!(!OperationEvaluator::evaluate(Operation::Parity, &[]));
        assert!(!OperationEvaluator::evaluate(Operation::Majority, &[]));
        assert!(OperationEvaluator::evaluate(Operation::AllEqual, &[]));
    }

    #[test]
    fn test_singletons() {
        for value in [true, false] {
            assert_eq!(OperationEvaluator::evaluate(Operation::And, &[value]), value);
            assert_eq!(OperationEvaluator::evaluate(Operation::Or, &[value]), value);
            assert_eq!(OperationEvaluator::evaluate(Operation::Xor, &[value]), value);
            assert_eq!(OperationEvaluator::evaluate(Operation::Majority, &[value]), value);
            assert!(OperationEvaluator::evaluate(Operation::AllEqual, &[value]));
        }
    }

    #[test]
    fn test_negated_operations_complement() {
        for values in all_sequences(8) {
            assert_eq!(
                OperationEvaluator::evaluate(Operation::Nand, &values),
                !OperationEvaluator::evaluate(Operation::And, &values)
            );
            assert_eq!(
                OperationEvaluator::evaluate(Operation::Nor, &values),
                !OperationEvaluator::evaluate(Operation::Or, &values)
            );
        }
    }

    #[test]
    fn test_parity_matches_xor() {
        for values in all_sequences(8) {
            assert_eq!(
                OperationEvaluator::evaluate(Operation::Xor, &values),
                OperationEvaluator::evaluate(Operation::Parity, &values)
            );
        }
    }

    #[test]
    fn test_all_equal_definition() {
        for values in all_sequences(8) {
            let expected = values.is_empty() || values.iter().all(|v| *v == values[0]);
            assert_eq!(OperationEvaluator::evaluate(Operation::AllEqual, &values), expected);
        }
    }

    #[test]
    fn test_majority_uses_exact_division() {
        // 2 of 4 is exactly half, not more
        assert!(!OperationEvaluator::evaluate(Operation::Majority, &[true, true, false, false]));
        assert!(OperationEvaluator::evaluate(Operation::Majority, &[true, true, true, false]));
        // 2 of 3 beats 1.5
        assert!(OperationEvaluator::evaluate(Operation::Majority, &[true, false, true]));
        assert!(!OperationEvaluator::evaluate(Operation::Majority, &[true, false, false]));
    }

    #[test]
    fn test_xor_counts_true_values() {
        assert!(OperationEvaluator::evaluate(Operation::Xor, &[true, true, true]));
        assert!(!OperationEvaluator::evaluate(Operation::Xor, &[true, false, true, false]));
    }

    #[test]
    fn test_evaluate_identifier() {
        assert_eq!(
            OperationEvaluator::evaluate_identifier("OR", &[false, true]),
            Ok(true)
        );
        assert_eq!(
            OperationEvaluator::evaluate_identifier("IMPLIES", &[true]),
            Err(LogicError::UnsupportedOperation("IMPLIES".to_string()))
        );
    }

    #[test]
    fn test_evaluate_detailed_keeps_inputs() {
        let evaluation = OperationEvaluator::evaluate_detailed(Operation::Nor, &[false, false]);
        assert_eq!(evaluation.inputs, vec![false, false]);
        assert!(evaluation.result);
        assert_eq!(evaluation.formula(), "NOR(F F)");
    }
}
