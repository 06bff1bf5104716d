//! Ranked per-student average grades.

use std::collections::HashMap;

use std::num::IntErrorKind;

use tracing::{debug, warn};

use crate::loader::RawRecord;
use crate::reports::report::Report;
use crate::reports::types::StudentAverage;
use crate::reports::utility::rounded_mean;

pub const STUDENT_FIELD: &str = "student_name";
pub const GRADE_FIELD: &str = "grade";

/// Decimal places kept in `average_grade`.
const AVERAGE_PLACES: u32 = 2;

/// Groups records by student, averages their integer grades and ranks
/// students from highest to lowest average.
///
/// Rows missing either field, or whose grade is not an integer, are
/// dropped. Students left with no grades do not appear. Equal averages
/// keep first-seen order.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentPerformanceReport;

impl Report for StudentPerformanceReport {
    type Row = StudentAverage;

    fn name(&self) -> &'static str {
        "student-performance"
    }

    fn generate(&self, records: &[RawRecord]) -> Vec<StudentAverage> {
        let groups = group_grades(records);

        let mut rows: Vec<StudentAverage> = groups
            .into_iter()
            .filter(|(_, grades)| !grades.is_empty())
            .map(|(student_name, grades)| StudentAverage {
                student_name,
                average_grade: rounded_mean(&grades, AVERAGE_PLACES),
            })
            .collect();

        // sort_by is stable
        rows.sort_by(|a, b| b.average_grade.total_cmp(&a.average_grade));

        debug!(students = rows.len(), "Student averages computed");
        rows
    }
}

/// Collects grades per student in first-seen order.
///
/// Grades are trimmed and parsed as `i128`. Integers outside that range
/// are skipped like any other unusable grade, but logged at `warn`.
fn group_grades(records: &[RawRecord]) -> Vec<(String, Vec<i128>)> {
    let mut groups: Vec<(String, Vec<i128>)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for (idx, record) in records.iter().enumerate() {
        let Some(student) = record.get(STUDENT_FIELD) else {
            debug!(row = idx, field = STUDENT_FIELD, "Skipping row with missing field");
            continue;
        };
        let Some(raw_grade) = record.get(GRADE_FIELD) else {
            debug!(row = idx, field = GRADE_FIELD, "Skipping row with missing field");
            continue;
        };
        let grade = match raw_grade.trim().parse::<i128>() {
            Ok(g) => g,
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                warn!(row = idx, grade = %raw_grade, "Skipping row with out-of-range grade");
                continue;
            }
            Err(e) => {
                debug!(row = idx, grade = %raw_grade, error = %e, "Skipping row with invalid grade");
                continue;
            }
        };

        let slot = *slots.entry(student.as_str()).or_insert_with(|| {
            groups.push((student.clone(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(grade);
    }

    groups
}
