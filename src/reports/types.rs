//! Row types produced by reports.

use serde::Serialize;

/// One student's mean grade. Field names double as table headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAverage {
    pub student_name: String,
    pub average_grade: f64,
}
