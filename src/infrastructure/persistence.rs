use crate::application::{Report, ReportData};
use crate::domain::InputParser;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes finished reports as JSON or CSV.
pub struct ReportExporter;

impl ReportExporter {
    /// Pretty-printed JSON array of reports.
    pub fn write_json<W: Write>(reports: &[Report], mut writer: W) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut writer, reports)?;
        writeln!(writer)?;
        Ok(())
    }

    /// One CSV section per report, separated by a blank line.
    ///
    /// Values are written in canonical `true,false` form so a section can be
    /// fed straight back to the boolean list parser.
    pub fn write_csv<W: Write>(reports: &[Report], mut writer: W) -> Result<(), ExportError> {
        for (index, report) in reports.iter().enumerate() {
            if index > 0 {
                writeln!(writer)?;
            }
            let mut csv_writer = csv::Writer::from_writer(&mut writer);
            Self::write_csv_section(report, &mut csv_writer)?;
            csv_writer.flush()?;
        }
        Ok(())
    }

    pub fn save_json(reports: &[Report], filename: &str) -> Result<String, ExportError> {
        let file = File::create(Path::new(filename))?;
        Self::write_json(reports, file)?;
        Ok(filename.to_string())
    }

    pub fn save_csv(reports: &[Report], filename: &str) -> Result<String, ExportError> {
        let file = File::create(Path::new(filename))?;
        Self::write_csv(reports, file)?;
        Ok(filename.to_string())
    }

    fn write_csv_section<W: Write>(
        report: &Report,
        writer: &mut csv::Writer<W>,
    ) -> Result<(), ExportError> {
        match &report.data {
            ReportData::SingleSet { rows, .. } => {
                writer.write_record(["operation", "values", "formula", "result"])?;
                for row in rows {
                    writer.write_record([
                        row.operation.name().to_string(),
                        InputParser::render_boolean_list(&row.variable_values),
                        row.formula.clone(),
                        row.result.to_string(),
                    ])?;
                }
            }
            ReportData::MultiSet { rows } => {
                writer.write_record(["set", "values", "formula", "result"])?;
                for row in rows {
                    writer.write_record([
                        row.set_index.to_string(),
                        InputParser::render_boolean_list(&row.variable_values),
                        row.formula.clone(),
                        row.result.to_string(),
                    ])?;
                }
            }
            ReportData::Operations { rows } => {
                writer.write_record(["operation", "description", "example"])?;
                for row in rows {
                    writer.write_record([
                        row.operation.name().to_string(),
                        row.description.clone(),
                        row.example_result.to_string(),
                    ])?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::CommandRunner;
    use crate::domain::Operation;
    use std::fs;
    use tempfile::tempdir;

    fn render_csv(reports: &[Report]) -> String {
        let mut buffer = Vec::new();
        ReportExporter::write_csv(reports, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_single_set_csv() {
        let report = Report::single_set(&[Operation::And, Operation::Or], &[true, false]).unwrap();
        assert_eq!(
            render_csv(&[report]),
            "operation,values,formula,result\n\
             AND,\"true,false\",AND(T F),false\n\
             OR,\"true,false\",OR(T F),true\n"
        );
    }

    #[test]
    fn test_multi_set_csv_uses_gap_free_indices() {
        let report =
            Report::multi_set(Operation::Majority, &[vec![], vec![true], vec![false, false]]).unwrap();
        assert_eq!(
            render_csv(&[report]),
            "set,values,formula,result\n\
             1,true,MAJORITY(T),true\n\
             2,\"false,false\",MAJORITY(F F),false\n"
        );
    }

    #[test]
    fn test_csv_sections_separated() {
        let reports = CommandRunner::demo_reports().unwrap();
        let csv = render_csv(&reports);
        assert_eq!(csv.split("\n\n").count(), 4);
        assert!(csv.starts_with("operation,values,formula,result\n"));
    }

    #[test]
    fn test_json_roundtrip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        let filename = path.to_str().unwrap();
        let reports = vec![Report::operation_info()];

        let saved = ReportExporter::save_json(&reports, filename).unwrap();
        assert_eq!(saved, filename);

        let content = fs::read_to_string(&path).unwrap();
        let loaded: Vec<Report> = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded, reports);
        assert!(content.contains("\"kind\": \"operations\""));
        assert!(content.contains("\"ALL_EQUAL\""));
    }

    #[test]
    fn test_save_csv_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("info.csv");
        let filename = path.to_str().unwrap();

        ReportExporter::save_csv(&[Report::operation_info()], filename).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("operation,description,example"));
        assert_eq!(lines.next(), Some("AND,All values must be True,false"));
        assert_eq!(content.lines().count(), 9);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("report.json");
        let result = ReportExporter::save_json(&[], path.to_str().unwrap());
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
