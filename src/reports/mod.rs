//! Report generation over loaded records.
//!
//! A report turns the flat record list into typed rows and knows how to
//! display them. [`ReportKind`] is the selector the CLI parses; each
//! variant maps to one [`Report`] implementation.

pub mod report;
pub mod student_performance;
pub mod types;
pub mod utility;

pub use report::{Report, ReportKind};
pub use student_performance::StudentPerformanceReport;
pub use types::StudentAverage;
