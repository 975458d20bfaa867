//! varlogic - Multi-variable Boolean Comparator
//!
//! Evaluates variadic logical operations over any number of boolean values,
//! either one value set against several operations or several value sets
//! against one operation. Results are printed as tables, exported as JSON
//! or CSV, or browsed in an interactive terminal viewer.

use std::fmt::Display;
use std::fs;
use std::io;
use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use varlogic::application::{App, AppMode, CommandRunner, ComparisonRequest, Report};
use varlogic::infrastructure::{ExportError, ReportExporter};
use varlogic::presentation::{render_report_text, render_ui, table_viewport_rows, InputHandler};

const AFTER_HELP: &str = "Example usage:
  varlogic --values true,false,true --operations AND,OR,XOR
  varlogic --sets \"true,false;false,true,true\" --operation MAJORITY
  varlogic --demo
  varlogic --info";

/// Multi-variable boolean comparator: evaluate logical operations over any
/// number of boolean values.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, after_help = AFTER_HELP)]
#[command(group(ArgGroup::new("mode").required(true).args(["values", "sets", "demo", "info"])))]
struct Args {
    /// Comma-separated boolean values (any quantity: true,false,true,...)
    #[arg(short, long, requires = "operations")]
    values: Option<String>,

    /// Semicolon-separated sets ("true,false;false,true,true;...")
    #[arg(short, long, requires = "operation")]
    sets: Option<String>,

    /// Show demonstration with various examples
    #[arg(short, long)]
    demo: bool,

    /// Show information about available operations
    #[arg(short, long)]
    info: bool,

    /// Comma-separated operations (AND,OR,XOR,...) for --values
    #[arg(short = 'O', long)]
    operations: Option<String>,

    /// Single operation for --sets
    #[arg(short, long)]
    operation: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, conflicts_with = "interactive")]
    format: OutputFormat,

    /// Write the output to a file instead of stdout
    #[arg(long, conflicts_with = "interactive")]
    output: Option<PathBuf>,

    /// Browse the reports in an interactive terminal viewer
    #[arg(long)]
    interactive: bool,

    /// Increase log verbosity (repeatable)
    #[arg(long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// How and where finished reports are emitted.
#[derive(Debug, Clone)]
struct OutputConfig {
    format: OutputFormat,
    output: Option<PathBuf>,
    interactive: bool,
}

impl From<&Args> for OutputConfig {
    fn from(args: &Args) -> Self {
        Self {
            format: args.format,
            output: args.output.clone(),
            interactive: args.interactive,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = OutputConfig::from(&args);
    let request = build_request(&args).unwrap_or_else(|e| fail(e));
    let reports = CommandRunner::run(&request).unwrap_or_else(|e| fail(e));

    if config.interactive {
        return run_viewer(reports);
    }

    if let Err(e) = emit(&reports, &config) {
        fail(e);
    }
    Ok(())
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("VARLOGIC_LOG", default_level))
        .init();
}

fn build_request(args: &Args) -> varlogic::domain::LogicResult<ComparisonRequest> {
    if let Some(values) = &args.values {
        ComparisonRequest::single_set(values, args.operations.as_deref().unwrap_or_default())
    } else if let Some(sets) = &args.sets {
        ComparisonRequest::multi_set(sets, args.operation.as_deref().unwrap_or_default())
    } else if args.demo {
        Ok(ComparisonRequest::Demo)
    } else {
        Ok(ComparisonRequest::Info)
    }
}

fn emit(reports: &[Report], config: &OutputConfig) -> Result<(), ExportError> {
    let mut buffer = Vec::new();
    match config.format {
        OutputFormat::Table => {
            let text = reports
                .iter()
                .map(render_report_text)
                .collect::<Vec<_>>()
                .join("\n\n");
            buffer.extend_from_slice(text.as_bytes());
            buffer.push(b'\n');
        }
        OutputFormat::Json => ReportExporter::write_json(reports, &mut buffer)?,
        OutputFormat::Csv => ReportExporter::write_csv(reports, &mut buffer)?,
    }

    match &config.output {
        Some(path) => {
            fs::write(path, &buffer)?;
            log::info!("wrote {} report(s) to {}", reports.len(), path.display());
        }
        None => io::Write::write_all(&mut io::stdout(), &buffer)?,
    }
    Ok(())
}

fn fail(err: impl Display) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}

/// Runs the interactive viewer in the alternate screen until the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn run_viewer(reports: Vec<Report>) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(reports);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main viewer event loop.
///
/// Renders the current report and dispatches key presses until the user
/// presses 'q' in normal mode.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        let size = terminal.size()?;
        app.update_viewport_size(table_viewport_rows(size.height));
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if matches!(app.mode, AppMode::Normal) => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
