//! Comparison services built on the operation evaluator.
//!
//! The two comparison modes turn inputs into structured rows and leave all
//! display decisions to the caller.

use super::errors::{LogicError, LogicResult};
use super::evaluator::OperationEvaluator;
use super::models::{BooleanSequence, MultiSetRow, Operation, OperationInfo, SingleSetRow};
use super::registry::OperationRegistry;

/// Runs single-set and multi-set comparisons.
///
/// # Examples
///
/// ```
/// use varlogic::domain::{ComparisonService, Operation};
///
/// let rows = ComparisonService::compare_single_set(
///     &[Operation::And, Operation::Or],
///     &[true, false, true],
/// ).unwrap();
///
/// assert_eq!(rows[0].formula, "AND(T F T)");
/// assert!(!rows[0].result);
/// assert!(rows[1].result);
/// ```
pub struct ComparisonService;

impl ComparisonService {
    /// Evaluates each operation, in order, against the same input sequence.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::EmptySingleSet`] when `values` is empty.
    pub fn compare_single_set(
        operations: &[Operation],
        values: &[bool],
    ) -> LogicResult<Vec<SingleSetRow>> {
        if values.is_empty() {
            return Err(LogicError::EmptySingleSet);
        }

        Ok(operations
            .iter()
            .map(|op| SingleSetRow::from(OperationEvaluator::evaluate_detailed(*op, values)))
            .collect())
    }

    /// Evaluates one operation against each set, skipping empty sets.
    ///
    /// Row indices count only the sets that were evaluated, so they stay
    /// gap-free when a set is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::EmptyBatch`] when no set has any values.
    pub fn compare_multi_set(
        operation: Operation,
        sets: &[BooleanSequence],
    ) -> LogicResult<Vec<MultiSetRow>> {
        let rows: Vec<MultiSetRow> = sets
            .iter()
            .filter(|set| !set.is_empty())
            .enumerate()
            .map(|(index, set)| {
                let evaluation = OperationEvaluator::evaluate_detailed(operation, set);
                MultiSetRow {
                    set_index: index + 1,
                    formula: evaluation.formula(),
                    variable_values: evaluation.inputs,
                    result: evaluation.result,
                }
            })
            .collect();

        if rows.is_empty() {
            return Err(LogicError::EmptyBatch);
        }

        let skipped = sets.len() - rows.len();
        if skipped > 0 {
            log::info!("skipped {} empty set(s) in {} comparison", skipped, operation);
        }

        Ok(rows)
    }

    pub fn list_operations() -> Vec<OperationInfo> {
        OperationRegistry::list_operations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_set_three_operations() {
        let rows = ComparisonService::compare_single_set(
            &[Operation::And, Operation::Or, Operation::Xor],
            &[true, false, true],
        )
        .unwrap();

        let summary: Vec<(Operation, &str, bool)> = rows
            .iter()
            .map(|row| (row.operation, row.formula.as_str(), row.result))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Operation::And, "AND(T F T)", false),
                (Operation::Or, "OR(T F T)", true),
                (Operation::Xor, "XOR(T F T)", false),
            ]
        );
        assert!(rows.iter().all(|row| row.variable_values == vec![true, false, true]));
    }

    #[test]
    fn test_single_set_keeps_duplicates_and_order() {
        let rows = ComparisonService::compare_single_set(
            &[Operation::Nor, Operation::And, Operation::Nor],
            &[false, false],
        )
        .unwrap();
        let ops: Vec<Operation> = rows.iter().map(|row| row.operation).collect();
        assert_eq!(ops, vec![Operation::Nor, Operation::And, Operation::Nor]);
    }

    #[test]
    fn test_single_set_rejects_empty_values() {
        assert_eq!(
            ComparisonService::compare_single_set(&[Operation::And], &[]),
            Err(LogicError::EmptySingleSet)
        );
    }

    #[test]
    fn test_single_set_without_operations() {
        assert_eq!(ComparisonService::compare_single_set(&[], &[true]), Ok(vec![]));
    }

    #[test]
    fn test_multi_set_majority() {
        let sets = vec![
            vec![true, false, true],
            vec![true, true, false, true],
            vec![false, false, true, true, true],
        ];
        let rows = ComparisonService::compare_multi_set(Operation::Majority, &sets).unwrap();

        assert_eq!(rows.iter().map(|r| r.result).collect::<Vec<_>>(), vec![true, true, true]);
        assert_eq!(rows.iter().map(|r| r.set_index).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(rows[2].formula, "MAJORITY(F F T T T)");
        assert_eq!(rows[1].variable_values.len(), 4);
    }

    #[test]
    fn test_multi_set_skips_empty_without_gaps() {
        let rows =
            ComparisonService::compare_multi_set(Operation::Majority, &[vec![], vec![true]]).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].set_index, 1);
        assert!(rows[0].result);

        let rows = ComparisonService::compare_multi_set(
            Operation::Or,
            &[vec![false], vec![], vec![], vec![true], vec![]],
        )
        .unwrap();
        assert_eq!(rows.iter().map(|r| r.set_index).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(rows.iter().map(|r| r.result).collect::<Vec<_>>(), vec![false, true]);
    }

    #[test]
    fn test_multi_set_empty_batch() {
        assert_eq!(
            ComparisonService::compare_multi_set(Operation::And, &[]),
            Err(LogicError::EmptyBatch)
        );
        assert_eq!(
            ComparisonService::compare_multi_set(Operation::And, &[vec![], vec![]]),
            Err(LogicError::EmptyBatch)
        );
    }

    #[test]
    fn test_list_operations_matches_registry() {
        let infos = ComparisonService::list_operations();
        let ops: Vec<Operation> = infos.iter().map(|info| info.operation).collect();
        assert_eq!(ops, OperationRegistry::all().to_vec());
    }
}
