//! Error types surfaced by the loader and the report layer.
//!
//! Row-level data problems never show up here: the aggregator drops the
//! offending row and keeps going.

use thiserror::Error;

/// Failure while turning input files into raw records.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The path does not resolve to an existing file.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// Any other I/O, encoding or CSV fault.
    #[error("error reading file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Failure selecting or rendering a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("unknown report type: {0}")]
    UnknownReport(String),

    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}
