//! CLI entry point for the student report tool.
//!
//! Loads grade records from one or more CSV files and prints the selected
//! report to stdout.

use anyhow::Result;
use clap::Parser;
use student_report::{
    loader::read_csv_files,
    logging,
    output::OutputFormat,
    reports::ReportKind,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "student_report")]
#[command(about = "Student performance analysis from CSV grade records", long_about = None)]
struct Cli {
    /// CSV files with grade records
    #[arg(short, long, required = true, num_args = 1.., value_name = "FILE")]
    files: Vec<String>,

    /// Report to build (student-performance)
    #[arg(short, long)]
    report: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _log_guard = logging::init()?;

    let cli = Cli::parse();
    let rendered = run(&cli)?;

    println!("{rendered}");
    Ok(())
}

/// Resolves the report, loads the files and renders the result.
///
/// The report selector is checked before any file is opened.
fn run(cli: &Cli) -> Result<String> {
    let kind: ReportKind = cli.report.parse()?;
    info!(report = %kind, files = cli.files.len(), "Starting report");

    let records = read_csv_files(&cli.files)?;
    Ok(kind.run(&records, cli.format)?)
}
