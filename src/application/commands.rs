//! Request handling that turns raw command text into finished reports.

use crate::domain::{
    BooleanSequence, ComparisonService, InputParser, LogicResult, MultiSetRow, Operation,
    OperationEvaluator, SingleSetRow,
};
use serde::{Deserialize, Serialize};

/// Inputs every operation is applied to in the operation-info report.
pub const INFO_EXAMPLE_VALUES: [bool; 4] = [true, false, true, false];

/// A fully parsed request for the comparison engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonRequest {
    SingleSet {
        operations: Vec<Operation>,
        values: BooleanSequence,
    },
    MultiSet {
        operation: Operation,
        sets: Vec<BooleanSequence>,
    },
    Demo,
    Info,
}

impl ComparisonRequest {
    /// Builds a single-set request from `--values` and `--operations` text.
    pub fn single_set(values: &str, operations: &str) -> LogicResult<Self> {
        Ok(ComparisonRequest::SingleSet {
            operations: InputParser::parse_operation_list(operations)?,
            values: InputParser::parse_boolean_list(values)?,
        })
    }

    /// Builds a multi-set request from `--sets` and `--operation` text.
    pub fn multi_set(sets: &str, operation: &str) -> LogicResult<Self> {
        Ok(ComparisonRequest::MultiSet {
            operation: InputParser::parse_operation(operation)?,
            sets: InputParser::parse_boolean_sets(sets)?,
        })
    }
}

/// An operation listed together with its result on [`INFO_EXAMPLE_VALUES`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationExample {
    pub operation: Operation,
    pub description: String,
    pub example_result: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportData {
    /// `values` is the shared input, kept so tables can show it even with no rows.
    SingleSet {
        values: BooleanSequence,
        rows: Vec<SingleSetRow>,
    },
    MultiSet {
        rows: Vec<MultiSetRow>,
    },
    Operations {
        rows: Vec<OperationExample>,
    },
}

impl ReportData {
    pub fn row_count(&self) -> usize {
        match self {
            ReportData::SingleSet { rows, .. } => rows.len(),
            ReportData::MultiSet { rows } => rows.len(),
            ReportData::Operations { rows } => rows.len(),
        }
    }
}

/// Banner shown above a single-set comparison.
pub const SINGLE_SET_HEADING: &str = "Single Set, Multiple Operations";
/// Banner shown above a multi-set comparison.
pub const MULTI_SET_HEADING: &str = "Multiple Sets, Single Operation";

/// A titled set of result rows, ready for rendering or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Optional banner printed above the table, e.g. a demo example label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub title: String,
    pub data: ReportData,
}

impl Report {
    pub fn single_set(operations: &[Operation], values: &[bool]) -> LogicResult<Self> {
        let rows = ComparisonService::compare_single_set(operations, values)?;
        Ok(Self {
            heading: None,
            title: format!("Evaluating {} Variables: {:?}", values.len(), values),
            data: ReportData::SingleSet {
                values: values.to_vec(),
                rows,
            },
        })
    }

    pub fn multi_set(operation: Operation, sets: &[BooleanSequence]) -> LogicResult<Self> {
        let rows = ComparisonService::compare_multi_set(operation, sets)?;
        Ok(Self {
            heading: None,
            title: format!("Comparing {} Sets with {}", sets.len(), operation),
            data: ReportData::MultiSet { rows },
        })
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn operation_info() -> Self {
        let rows = ComparisonService::list_operations()
            .into_iter()
            .map(|info| OperationExample {
                example_result: OperationEvaluator::evaluate(info.operation, &INFO_EXAMPLE_VALUES),
                operation: info.operation,
                description: info.description,
            })
            .collect();

        Self {
            heading: None,
            title: "Available Operations (work with any number of variables)".to_string(),
            data: ReportData::Operations { rows },
        }
    }
}

/// Executes requests against the comparison services.
pub struct CommandRunner;

impl CommandRunner {
    /// Runs a request and returns its reports in display order.
    ///
    /// # Examples
    ///
    /// ```
    /// use varlogic::application::{CommandRunner, ComparisonRequest, ReportData};
    ///
    /// let request = ComparisonRequest::multi_set("true,false;;true,true", "and").unwrap();
    /// let reports = CommandRunner::run(&request).unwrap();
    ///
    /// assert_eq!(reports.len(), 1);
    /// assert_eq!(reports[0].title, "Comparing 3 Sets with AND");
    /// assert_eq!(reports[0].data.row_count(), 2);
    /// ```
    pub fn run(request: &ComparisonRequest) -> LogicResult<Vec<Report>> {
        let reports = match request {
            ComparisonRequest::SingleSet { operations, values } => {
                log::info!(
                    "single-set comparison: {} operation(s) over {} value(s)",
                    operations.len(),
                    values.len()
                );
                vec![Report::single_set(operations, values)?.with_heading(SINGLE_SET_HEADING)]
            }
            ComparisonRequest::MultiSet { operation, sets } => {
                log::info!("multi-set comparison: {} over {} set(s)", operation, sets.len());
                vec![Report::multi_set(*operation, sets)?.with_heading(MULTI_SET_HEADING)]
            }
            ComparisonRequest::Demo => {
                log::info!("running demonstration reports");
                Self::demo_reports()?
            }
            ComparisonRequest::Info => vec![Report::operation_info()],
        };
        Ok(reports)
    }

    /// The demonstration catalogue: 2, 5, and 10 variables, then several sets.
    pub fn demo_reports() -> LogicResult<Vec<Report>> {
        const T: bool = true;
        const F: bool = false;

        Ok(vec![
            Report::single_set(&[Operation::And, Operation::Or, Operation::Xor], &[T, F])?
                .with_heading("Example 1: 2 Variables"),
            Report::single_set(&[Operation::Majority, Operation::Parity], &[T, F, T, T, F])?
                .with_heading("Example 2: 5 Variables"),
            Report::single_set(
                &[Operation::And, Operation::Or, Operation::Majority],
                &[T, F, T, F, T, T, F, T, F, T],
            )?
            .with_heading("Example 3: 10 Variables"),
            Report::multi_set(
                Operation::Majority,
                &[vec![T, F, T], vec![T, T, F, T], vec![F, F, T, T, T]],
            )?
            .with_heading("Example 4: Multiple Sets with MAJORITY"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LogicError;

    #[test]
    fn test_single_set_request_parsing() {
        let request = ComparisonRequest::single_set("true,false,true", "AND, or").unwrap();
        assert_eq!(
            request,
            ComparisonRequest::SingleSet {
                operations: vec![Operation::And, Operation::Or],
                values: vec![true, false, true],
            }
        );
    }

    #[test]
    fn test_single_set_request_bad_operation() {
        assert_eq!(
            ComparisonRequest::single_set("true", "AND,MAYBE"),
            Err(LogicError::MalformedOperationName("MAYBE".to_string()))
        );
    }

    #[test]
    fn test_multi_set_request_bad_token() {
        assert_eq!(
            ComparisonRequest::multi_set("true;yes,nah", "OR"),
            Err(LogicError::InvalidBooleanToken {
                token: "nah".to_string(),
                position: 2,
                set: Some(2),
            })
        );
    }

    #[test]
    fn test_single_set_report_title() {
        let report = Report::single_set(&[Operation::And], &[true, false]).unwrap();
        assert_eq!(report.title, "Evaluating 2 Variables: [true, false]");
        assert_eq!(report.data.row_count(), 1);
    }

    #[test]
    fn test_empty_values_surface_error() {
        let request = ComparisonRequest::single_set("", "AND").unwrap();
        assert_eq!(CommandRunner::run(&request), Err(LogicError::EmptySingleSet));
    }

    #[test]
    fn test_empty_batch_surface_error() {
        let request = ComparisonRequest::multi_set(" ; ", "AND").unwrap();
        assert_eq!(CommandRunner::run(&request), Err(LogicError::EmptyBatch));
    }

    #[test]
    fn test_info_report_examples() {
        let report = Report::operation_info();
        let ReportData::Operations { rows } = &report.data else {
            panic!("expected operations report");
        };
        assert_eq!(rows.len(), 8);

        let result_of = |op: Operation| rows.iter().find(|r| r.operation == op).unwrap().example_result;
        // T,F,T,F: two of four true
        assert!(!result_of(Operation::And));
        assert!(result_of(Operation::Or));
        assert!(!result_of(Operation::Xor));
        assert!(result_of(Operation::Nand));
        assert!(!result_of(Operation::Nor));
        assert!(!result_of(Operation::Majority));
        assert!(!result_of(Operation::Parity));
        assert!(!result_of(Operation::AllEqual));
    }

    #[test]
    fn test_demo_catalogue() {
        let reports = CommandRunner::run(&ComparisonRequest::Demo).unwrap();
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[0].title, "Evaluating 2 Variables: [true, false]");
        assert_eq!(reports[2].data.row_count(), 3);
        assert_eq!(reports[3].title, "Comparing 3 Sets with MAJORITY");

        let headings: Vec<Option<&str>> = reports.iter().map(|r| r.heading.as_deref()).collect();
        assert_eq!(
            headings,
            vec![
                Some("Example 1: 2 Variables"),
                Some("Example 2: 5 Variables"),
                Some("Example 3: 10 Variables"),
                Some("Example 4: Multiple Sets with MAJORITY"),
            ]
        );

        let ReportData::MultiSet { rows } = &reports[3].data else {
            panic!("expected multi-set report");
        };
        assert!(rows.iter().all(|row| row.result));
    }

    #[test]
    fn test_comparison_reports_carry_mode_banner() {
        let single = ComparisonRequest::single_set("t,f", "AND").unwrap();
        let reports = CommandRunner::run(&single).unwrap();
        assert_eq!(reports[0].heading.as_deref(), Some(SINGLE_SET_HEADING));

        let multi = ComparisonRequest::multi_set("t;f", "OR").unwrap();
        let reports = CommandRunner::run(&multi).unwrap();
        assert_eq!(reports[0].heading.as_deref(), Some(MULTI_SET_HEADING));

        assert_eq!(CommandRunner::run(&ComparisonRequest::Info).unwrap()[0].heading, None);
    }

    #[test]
    fn test_single_set_report_keeps_inputs_without_operations() {
        let report = Report::single_set(&[], &[true, false, true]).unwrap();
        assert_eq!(report.data.row_count(), 0);
        assert_eq!(
            report.data,
            ReportData::SingleSet {
                values: vec![true, false, true],
                rows: vec![],
            }
        );
    }
}
