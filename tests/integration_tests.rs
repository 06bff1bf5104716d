use std::io::Write;
use std::path::PathBuf;

use student_report::error::{LoadError, ReportError};
use student_report::loader::read_csv_files;
use student_report::output::{NO_DATA_MESSAGE, OutputFormat};
use student_report::reports::{Report, ReportKind, StudentAverage, StudentPerformanceReport};
use tempfile::NamedTempFile;

const HEADER: &str = "student_name,subject,teacher_name,date,grade\n";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn names(rows: &[StudentAverage]) -> Vec<&str> {
    rows.iter().map(|r| r.student_name.as_str()).collect()
}

#[test]
fn test_full_pipeline_single_file() {
    let records = read_csv_files(&[fixture("grades_term1.csv")]).expect("Failed to load fixture");
    assert_eq!(records.len(), 5);
    assert!(records.iter().all(|r| r.contains_key("student_name") && r.contains_key("grade")));

    let rows = StudentPerformanceReport.generate(&records);
    assert_eq!(
        names(&rows),
        vec!["Власова Алина", "Семенова Елена", "Титов Владислав"]
    );
    assert_eq!(rows[0].average_grade, 5.0);
    assert_eq!(rows[1].average_grade, 4.5);
    assert_eq!(rows[2].average_grade, 3.5);
}

#[test]
fn test_merging_files_groups_across_files() {
    let records = read_csv_files(&[fixture("grades_term1.csv"), fixture("grades_term2.csv")])
        .expect("Failed to load fixtures");

    assert_eq!(records.len(), 8);
    assert_eq!(records[0]["student_name"], "Семенова Елена");
    assert_eq!(records[5]["student_name"], "Власова Алина");
    assert_eq!(records[7]["date"], "2023-11-05");

    let rows = StudentPerformanceReport.generate(&records);
    // Петров Иван has only an invalid grade.
    assert_eq!(
        rows,
        vec![
            StudentAverage {
                student_name: "Семенова Елена".to_string(),
                average_grade: 4.5,
            },
            StudentAverage {
                student_name: "Титов Владислав".to_string(),
                average_grade: 4.0,
            },
            StudentAverage {
                student_name: "Власова Алина".to_string(),
                average_grade: 4.0,
            },
        ]
    );
}

#[test]
fn test_header_only_file_gives_empty_report() {
    let file = temp_csv(HEADER);
    let records = read_csv_files(&[file.path()]).unwrap();
    assert!(records.is_empty());

    let out = ReportKind::StudentPerformance
        .run(&records, OutputFormat::Table)
        .unwrap();
    assert_eq!(out, NO_DATA_MESSAGE);
}

#[test]
fn test_invalid_grade_scenario() {
    let file = temp_csv(&format!(
        "{HEADER}\
Семенова Елена,Английский язык,Ковалева Анна,2023-10-10,5
Титов Владислав,География,Орлов Сергей,2023-10-12,invalid
Власова Алина,Биология,Ткаченко Наталья,2023-10-15,5
"
    ));

    let records = read_csv_files(&[file.path()]).unwrap();
    let rows = StudentPerformanceReport.generate(&records);
    assert_eq!(names(&rows), vec!["Семенова Елена", "Власова Алина"]);
    assert!(rows.iter().all(|r| r.average_grade == 5.0));
}

#[test]
fn test_different_data_scenarios() {
    let cases: &[(&str, &[&str])] = &[
        (
            "Семенова Елена,Английский язык,Ковалева Анна,2023-10-10,5\n\
             Титов Владислав,География,Орлов Сергей,2023-10-12,4\n",
            &["Семенова Елена", "Титов Владислав"],
        ),
        (
            "Власова Алина,Биология,Ткаченко Наталья,2023-10-15,5\n",
            &["Власова Алина"],
        ),
        (
            "Петров Иван,Химия,Смирнова Ольга,2023-10-18,5\n\
             Сидорова Мария,Физика,Кузнецов Дмитрий,2023-10-19,4\n",
            &["Петров Иван", "Сидорова Мария"],
        ),
    ];

    for (rows, expected) in cases {
        let file = temp_csv(&format!("{HEADER}{rows}"));
        let records = read_csv_files(&[file.path()]).unwrap();
        let report = StudentPerformanceReport.generate(&records);
        assert_eq!(names(&report), expected.to_vec());
    }
}

#[test]
fn test_nonexistent_path_is_not_found() {
    let err = read_csv_files(&["nonexistent_file.csv"]).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound { .. }));
    assert_eq!(err.to_string(), "file not found: nonexistent_file.csv");
}

#[test]
fn test_directory_path_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_csv_files(&[dir.path()]).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
}

#[test]
fn test_unknown_report_selector() {
    let err = "attendance".parse::<ReportKind>().unwrap_err();
    assert!(matches!(err, ReportError::UnknownReport(_)));
}

#[test]
fn test_table_output() {
    let records = read_csv_files(&[fixture("grades_term1.csv")]).unwrap();
    let out = ReportKind::StudentPerformance
        .run(&records, OutputFormat::Table)
        .unwrap();

    let expected = "\
+-----------------+---------------+
| student_name    | average_grade |
+=================+===============+
| Власова Алина   |             5 |
+-----------------+---------------+
| Семенова Елена  |           4.5 |
+-----------------+---------------+
| Титов Владислав |           3.5 |
+-----------------+---------------+";
    assert_eq!(out, expected);
}

#[test]
fn test_json_output() {
    let records = read_csv_files(&[fixture("grades_term1.csv")]).unwrap();
    let out = ReportKind::StudentPerformance
        .run(&records, OutputFormat::Json)
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["student_name"], "Власова Алина");
    assert_eq!(rows[0]["average_grade"], 5.0);
    assert_eq!(rows[2]["average_grade"], 3.5);
}
