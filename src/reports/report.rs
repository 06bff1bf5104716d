use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ReportError;
use crate::loader::RawRecord;
use crate::output::{self, OutputFormat};
use crate::reports::student_performance::StudentPerformanceReport;

/// A report computed from raw records.
///
/// Implementors only decide how rows are built; display goes through the
/// shared renderer unless a report needs its own layout.
pub trait Report {
    type Row: Serialize;

    /// Selector name used on the command line.
    fn name(&self) -> &'static str;

    /// Builds report rows from the records. Must not fail on bad rows.
    fn generate(&self, records: &[RawRecord]) -> Vec<Self::Row>;

    /// Formats rows for stdout.
    fn display(&self, rows: &[Self::Row], format: OutputFormat) -> Result<String, ReportError> {
        Ok(output::render(rows, format)?)
    }
}

/// The reports the CLI can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    StudentPerformance,
}

impl ReportKind {
    pub const ALL: &'static [ReportKind] = &[ReportKind::StudentPerformance];

    pub fn name(self) -> &'static str {
        match self {
            ReportKind::StudentPerformance => StudentPerformanceReport.name(),
        }
    }

    /// Generates the selected report and renders it in one step.
    #[tracing::instrument(skip(records), fields(report = self.name(), records = records.len()))]
    pub fn run(self, records: &[RawRecord], format: OutputFormat) -> Result<String, ReportError> {
        match self {
            ReportKind::StudentPerformance => run_report(&StudentPerformanceReport, records, format),
        }
    }
}

fn run_report<R: Report>(
    report: &R,
    records: &[RawRecord],
    format: OutputFormat,
) -> Result<String, ReportError> {
    let rows = report.generate(records);
    report.display(&rows, format)
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ReportError::UnknownReport(s.to_string()))
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
