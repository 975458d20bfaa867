use crate::application::{App, AppMode, INFO_EXAMPLE_VALUES, Report, ReportData};
use crate::domain::{InputParser, OperationRegistry, bool_symbol};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table},
};

const COLUMN_SPACING: usize = 1;

/// A report flattened into header and cell text, with column widths sized to fit.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub widths: Vec<usize>,
    pub border_type: BorderType,
}

impl ReportTable {
    pub fn from_report(report: &Report) -> Self {
        let (headers, rows, border_type) = match &report.data {
            ReportData::SingleSet { values, rows } => {
                let mut headers = variable_headers(values.len());
                headers.extend(["Operation", "Formula", "Result"].map(String::from));

                let cells: Vec<Vec<String>> = rows
                    .iter()
                    .map(|row| {
                        let mut cells: Vec<String> =
                            row.variable_values.iter().map(|v| bool_symbol(*v).to_string()).collect();
                        cells.push(row.operation.name().to_string());
                        cells.push(row.formula.clone());
                        cells.push(bool_symbol(row.result).to_string());
                        cells
                    })
                    .collect();
                (headers, cells, BorderType::Rounded)
            }
            ReportData::MultiSet { rows } => {
                let max_vars = rows.iter().map(|r| r.variable_values.len()).max().unwrap_or(0);
                let mut headers = vec!["Set #".to_string()];
                headers.extend(variable_headers(max_vars));
                headers.extend(["Formula", "Result"].map(String::from));

                let cells: Vec<Vec<String>> = rows
                    .iter()
                    .map(|row| {
                        let mut cells = vec![row.set_index.to_string()];
                        for i in 0..max_vars {
                            cells.push(match row.variable_values.get(i) {
                                Some(v) => bool_symbol(*v).to_string(),
                                None => "-".to_string(),
                            });
                        }
                        cells.push(row.formula.clone());
                        cells.push(bool_symbol(row.result).to_string());
                        cells
                    })
                    .collect();
                (headers, cells, BorderType::Thick)
            }
            ReportData::Operations { rows } => {
                let example = INFO_EXAMPLE_VALUES.map(bool_symbol).join(",");
                let headers = vec![
                    "Operation".to_string(),
                    "Description".to_string(),
                    format!("Example: op({})", example),
                ];
                let cells: Vec<Vec<String>> = rows
                    .iter()
                    .map(|row| {
                        vec![
                            row.operation.name().to_string(),
                            row.description.clone(),
                            bool_symbol(row.example_result).to_string(),
                        ]
                    })
                    .collect();
                (headers, cells, BorderType::Double)
            }
        };

        let widths = headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                rows.iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(1)
            })
            .collect();

        Self {
            title: report.title.clone(),
            headers,
            rows,
            widths,
            border_type,
        }
    }

    /// Width needed to draw every column and the title inside the border.
    pub fn total_width(&self) -> usize {
        self.inner_width() + 2
    }

    fn inner_width(&self) -> usize {
        let columns: usize = self.widths.iter().sum();
        let spacing = COLUMN_SPACING * self.widths.len().saturating_sub(1);
        (columns + spacing).max(self.title.chars().count())
    }

    /// Header, border, and one line per row.
    pub fn total_height(&self) -> usize {
        self.rows.len() + 3
    }

    /// Builds the widget for rows `skip..skip + take`.
    ///
    /// Columns wider than a terminal can address are clamped; the text
    /// rendering has no such limit.
    pub fn widget(&self, skip: usize, take: usize) -> Table<'_> {
        let header = Row::new(self.headers.iter().map(|h| Cell::from(h.as_str())))
            .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD));

        let rows = self.rows.iter().skip(skip).take(take).map(|row| {
            Row::new(row.iter().map(|text| Cell::from(text.as_str()).style(cell_style(text))))
        });

        let widths = self
            .widths
            .iter()
            .map(|w| Constraint::Length(u16::try_from(*w).unwrap_or(u16::MAX)));

        Table::new(rows, widths)
            .header(header)
            .column_spacing(COLUMN_SPACING as u16)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(self.border_type)
                    .title(self.title.as_str())
                    .title_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
            )
    }

    /// The table as plain text, drawn with the same border set the viewer uses.
    pub fn text_lines(&self) -> Vec<String> {
        let border = BorderType::border_symbols(self.border_type);
        let inner = self.inner_width();
        let title_len = self.title.chars().count();

        let mut lines = Vec::with_capacity(self.total_height());
        lines.push(format!(
            "{}{}{}{}",
            border.top_left,
            self.title,
            border.horizontal_top.repeat(inner - title_len),
            border.top_right
        ));
        lines.push(self.text_row(&self.headers, inner, border.vertical_left, border.vertical_right));
        for row in &self.rows {
            lines.push(self.text_row(row, inner, border.vertical_left, border.vertical_right));
        }
        lines.push(format!(
            "{}{}{}",
            border.bottom_left,
            border.horizontal_bottom.repeat(inner),
            border.bottom_right
        ));
        lines
    }

    fn text_row(&self, cells: &[String], inner: usize, left: &str, right: &str) -> String {
        let body = self
            .widths
            .iter()
            .zip(cells)
            .map(|(width, cell)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" ".repeat(COLUMN_SPACING).as_str());
        format!("{}{:<inner$}{}", left, body, right, inner = inner)
    }
}

fn variable_headers(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("V{}", i)).collect()
}

fn cell_style(text: &str) -> Style {
    match text {
        "T" => Style::default().fg(Color::Green),
        "F" => Style::default().fg(Color::Red),
        _ => Style::default(),
    }
}

/// Renders a report as plain text lines, preceded by its heading if it has one.
///
/// # Examples
///
/// ```
/// use varlogic::application::Report;
/// use varlogic::domain::Operation;
/// use varlogic::presentation::render_report_text;
///
/// let report = Report::single_set(&[Operation::Or], &[true, false]).unwrap();
/// let text = render_report_text(&report);
/// assert!(text.contains("OR(T F)"));
/// ```
pub fn render_report_text(report: &Report) -> String {
    let table = ReportTable::from_report(report);
    let mut lines = Vec::with_capacity(table.total_height() + 2);
    if let Some(heading) = &report.heading {
        lines.push(heading.clone());
        lines.push(String::new());
    }
    lines.extend(table.text_lines());
    lines.join("\n")
}

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_report(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

/// Rows of the report table that fit in a terminal of the given height.
pub fn table_viewport_rows(terminal_height: u16) -> usize {
    // header line, status bar, table border and column header
    terminal_height.saturating_sub(1 + 3 + 3) as usize
}

fn header_text(app: &App) -> String {
    let mut text = format!(
        "varlogic - Boolean Comparator | Report {}/{}",
        (app.selected_report + 1).min(app.reports.len()),
        app.reports.len()
    );
    if let Some(heading) = app.current_report().and_then(|r| r.heading.as_deref()) {
        text.push_str(" | ");
        text.push_str(heading);
    }
    text
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(header_text(app)).style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_report(f: &mut Frame, app: &App, area: Rect) {
    match app.current_report() {
        Some(report) => {
            let table = ReportTable::from_report(report);
            let visible = area.height.saturating_sub(3) as usize;
            f.render_widget(table.widget(app.scroll_row, visible), area);
        }
        None => {
            let empty = Paragraph::new("No reports to display")
                .block(Block::default().borders(Borders::ALL).title("Report"));
            f.render_widget(empty, area);
        }
    }
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "Tab/←→: switch report | ↑↓/jk: scroll | Ctrl+S: export JSON | Ctrl+E: export CSV | F1/?: help | q: quit".to_string()
            }
        }
        AppMode::Help => "↑↓/jk: scroll | Home: top | Esc/q: close help".to_string(),
        AppMode::ExportJson => format!("Export JSON as: {} (Enter to export, Esc to cancel)", app.filename_input),
        AppMode::ExportCsv => format!("Export CSV as: {} (Enter to export, Esc to cancel)", app.filename_input),
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Help => Style::default().fg(Color::Cyan),
            AppMode::ExportJson => Style::default().fg(Color::Yellow),
            AppMode::ExportCsv => Style::default().fg(Color::Magenta),
        });
    f.render_widget(input, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!("varlogic Help (Line {}/{})", start_line + 1, help_lines.len()))
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

/// Number of lines in the help text, used to bound help scrolling.
pub fn help_line_count() -> usize {
    get_help_text().lines().count()
}

fn get_help_text() -> String {
    let mut text = String::from("VARLOGIC BOOLEAN COMPARATOR\n\n=== OPERATIONS ===\n");
    for op in OperationRegistry::all() {
        text.push_str(&format!("{:<12}{}\n", op.name(), OperationRegistry::description(op)));
    }

    text.push_str(&format!(
        r#"
Every operation accepts any number of values.
Empty input: AND, NOR, ALL_EQUAL are T; the others are F.

=== INPUT SYNTAX ===
Values          true,false,...      (also t/f, 1/0, yes/no, any case)
Sets            set1;set2;...       each set is a list of values
Example         {}

=== NAVIGATION ===
Tab / → / l     Next report
Shift+Tab / ← / h  Previous report
↑↓ or j/k       Scroll report rows
F1 or ?         Show this help
q               Quit

=== EXPORT ===
Ctrl+S          Export all reports as JSON
Ctrl+E          Export all reports as CSV

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#,
        InputParser::render_boolean_list(&INFO_EXAMPLE_VALUES)
    ));
    text
}
