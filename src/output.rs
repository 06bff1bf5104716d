//! Rendering of report rows for the terminal.
//!
//! Supports a grid-style text table and pretty JSON. Rows are any
//! [`Serialize`] struct; its field names become the column headers.

use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Message printed instead of an empty table.
pub const NO_DATA_MESSAGE: &str = "No data to display";

/// How report rows are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Grid table with a header row
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// Renders rows in the requested format. An empty table becomes
/// [`NO_DATA_MESSAGE`]; empty JSON stays `[]`.
pub fn render<T: Serialize>(rows: &[T], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table if rows.is_empty() => Ok(NO_DATA_MESSAGE.to_string()),
        OutputFormat::Table => render_table(rows),
        OutputFormat::Json => render_json(rows),
    }
}

/// Serializes rows as a pretty-printed JSON array.
pub fn render_json<T: Serialize>(rows: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}

/// Draws rows as a grid table:
///
/// ```text
/// +--------------+---------------+
/// | student_name | average_grade |
/// +==============+===============+
/// | Carla        |             5 |
/// +--------------+---------------+
/// ```
///
/// Numbers are right-aligned, everything else left-aligned. Headers come
/// from the first row's fields; rows that are not structs or maps get a
/// single `value` column.
pub fn render_table<T: Serialize>(rows: &[T]) -> Result<String, serde_json::Error> {
    let values = rows
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;

    let headers: Vec<String> = match values.first() {
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        Some(_) => vec!["value".to_string()],
        None => return Ok(String::new()),
    };

    let body: Vec<Vec<Cell>> = values
        .iter()
        .map(|value| match value {
            Value::Object(map) => headers
                .iter()
                .map(|h| Cell::from_value(map.get(h).unwrap_or(&Value::Null)))
                .collect(),
            other => vec![Cell::from_value(other)],
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            body.iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.width())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    // Header alignment follows the column: numeric columns right-align.
    let numeric: Vec<bool> = (0..headers.len())
        .map(|i| {
            body.iter()
                .filter_map(|row| row.get(i))
                .all(|c| c.numeric)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&separator(&widths, '-'));
    out.push('\n');
    out.push_str(&line(
        headers.iter().map(String::as_str).zip(numeric.iter().copied()),
        &widths,
    ));
    out.push('\n');
    out.push_str(&separator(&widths, '='));

    for row in &body {
        out.push('\n');
        out.push_str(&line(
            row.iter().map(|c| (c.text.as_str(), c.numeric)),
            &widths,
        ));
        out.push('\n');
        out.push_str(&separator(&widths, '-'));
    }

    debug!(rows = body.len(), columns = headers.len(), "Table rendered");
    Ok(out)
}

struct Cell {
    text: String,
    numeric: bool,
}

impl Cell {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => {
                let text = match (n.as_i64(), n.as_f64()) {
                    (Some(i), _) => i.to_string(),
                    (None, Some(f)) => f.to_string(),
                    _ => n.to_string(),
                };
                Cell {
                    text,
                    numeric: true,
                }
            }
            Value::String(s) => Cell {
                text: s.clone(),
                numeric: false,
            },
            Value::Null => Cell {
                text: String::new(),
                numeric: false,
            },
            other => Cell {
                text: other.to_string(),
                numeric: false,
            },
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }
}

fn separator(widths: &[usize], fill: char) -> String {
    let mut s = String::from("+");
    for w in widths {
        s.extend(std::iter::repeat_n(fill, w + 2));
        s.push('+');
    }
    s
}

fn line<'a>(cells: impl Iterator<Item = (&'a str, bool)>, widths: &[usize]) -> String {
    let mut s = String::from("|");
    for ((text, numeric), w) in cells.zip(widths) {
        if numeric {
            s.push_str(&format!(" {:>w$} |", text, w = *w));
        } else {
            s.push_str(&format!(" {:<w$} |", text, w = *w));
        }
    }
    s
}
