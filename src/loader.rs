//! Record loading from comma-delimited files with a header row.

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::error::LoadError;

/// One data row keyed by its column name.
pub type RawRecord = HashMap<String, String>;

/// Reads every file in `paths` and concatenates their rows, file order
/// first, then row order.
///
/// # Errors
///
/// Returns [`LoadError::FileNotFound`] when a path does not exist and
/// [`LoadError::Read`] for any other I/O or CSV failure. The first failing
/// file aborts the whole load.
#[tracing::instrument(skip_all, fields(files = paths.len()))]
pub fn read_csv_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RawRecord>, LoadError> {
    let mut records = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let before = records.len();
        read_csv_file(path, &mut records)?;
        debug!(path = %path.display(), rows = records.len() - before, "File loaded");
    }

    info!(rows = records.len(), "Records loaded");
    Ok(records)
}

fn read_csv_file(path: &Path, out: &mut Vec<RawRecord>) -> Result<(), LoadError> {
    let display = path.display().to_string();

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: display.clone(),
        },
        _ => LoadError::Read {
            path: display.clone(),
            source: e.into(),
        },
    })?;

    let read_err = |source: csv::Error| LoadError::Read {
        path: display.clone(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = rdr.headers().map_err(read_err)?.clone();

    for result in rdr.records() {
        let row = result.map_err(read_err)?;
        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        out.push(record);
    }

    Ok(())
}
