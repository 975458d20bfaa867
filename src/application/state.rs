//! Application state for the interactive report viewer.
//!
//! This module holds the reports being browsed together with the mode
//! and scroll state the terminal UI renders from.

use super::commands::Report;

/// Represents the current mode of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Browsing reports - arrow keys scroll and switch reports
    Normal,
    /// Help popup is displayed
    Help,
    /// JSON export filename prompt is open
    ExportJson,
    /// CSV export filename prompt is open
    ExportCsv,
}

/// Viewer state: the reports plus which one is shown and how far it is scrolled.
///
/// # Examples
///
/// ```
/// use varlogic::application::{App, Report};
///
/// let app = App::new(vec![Report::operation_info()]);
/// assert_eq!(app.selected_report, 0);
/// assert!(app.current_report().is_some());
/// ```
#[derive(Debug)]
pub struct App {
    pub reports: Vec<Report>,
    /// Index into `reports` of the report on screen
    pub selected_report: usize,
    /// First visible row of the current report
    pub scroll_row: usize,
    pub mode: AppMode,
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Input buffer for filename entry
    pub filename_input: String,
    /// Rows that fit in the table area, refreshed on every draw
    pub viewport_rows: usize,
}

impl App {
    pub fn new(reports: Vec<Report>) -> Self {
        Self {
            reports,
            selected_report: 0,
            scroll_row: 0,
            mode: AppMode::Normal,
            help_scroll: 0,
            status_message: None,
            filename_input: String::new(),
            viewport_rows: 10,
        }
    }

    pub fn current_report(&self) -> Option<&Report> {
        self.reports.get(self.selected_report)
    }

    pub fn next_report(&mut self) {
        if self.selected_report + 1 < self.reports.len() {
            self.selected_report += 1;
            self.scroll_row = 0;
        }
    }

    pub fn previous_report(&mut self) {
        if self.selected_report > 0 {
            self.selected_report -= 1;
            self.scroll_row = 0;
        }
    }

    pub fn scroll_down(&mut self) {
        let rows = self.current_report().map(|r| r.data.row_count()).unwrap_or(0);
        let max_scroll = rows.saturating_sub(self.viewport_rows.max(1));
        if self.scroll_row < max_scroll {
            self.scroll_row += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_row = self.scroll_row.saturating_sub(1);
    }

    pub fn update_viewport_size(&mut self, rows: usize) {
        self.viewport_rows = rows;
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn start_json_export(&mut self) {
        self.mode = AppMode::ExportJson;
        self.filename_input = "report.json".to_string();
        self.status_message = None;
    }

    pub fn start_csv_export(&mut self) {
        self.mode = AppMode::ExportCsv;
        self.filename_input = "report.csv".to_string();
        self.status_message = None;
    }

    pub fn cancel_filename_input(&mut self) {
        self.mode = AppMode::Normal;
        self.filename_input.clear();
    }

    /// Filename from the prompt, falling back to the mode's default.
    pub fn get_export_filename(&self) -> String {
        if !self.filename_input.trim().is_empty() {
            return self.filename_input.trim().to_string();
        }
        match self.mode {
            AppMode::ExportCsv => "report.csv".to_string(),
            _ => "report.json".to_string(),
        }
    }

    pub fn set_export_result(&mut self, result: Result<String, String>) {
        self.status_message = Some(match result {
            Ok(filename) => format!("Exported to {}", filename),
            Err(error) => format!("Export failed: {}", error),
        });
        self.mode = AppMode::Normal;
        self.filename_input.clear();
    }
}
