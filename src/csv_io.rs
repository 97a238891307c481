//! CSV input/output for the people table.
//!
//! The write side produces a headered CSV with ISO-8601 dates; the read
//! side parses those dates back into a `Date` column, so a round trip
//! preserves the schema.

use crate::error::PrimerError;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use std::fs::File;
use std::path::Path;

/// Write a frame to `path` as headered CSV, creating the parent directory
/// if needed.
pub fn write_csv(df: &DataFrame, path: impl AsRef<Path>) -> Result<(), PrimerError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    let mut out = df.clone();
    CsvWriter::new(&mut file).include_header(true).finish(&mut out)?;
    log::debug!("wrote {} rows to {}", df.height(), path.display());
    Ok(())
}

/// Read a headered CSV back, parsing ISO-8601 date columns into `Date`.
pub fn read_csv_with_dates(path: impl AsRef<Path>) -> Result<DataFrame, PrimerError> {
    use polars::prelude::*;
    let path = path.as_ref();
    if !path.exists() {
        return Err(PrimerError::NotFound(format!(
            "csv file '{}' not found (run the csv_io lesson first)",
            path.display()
        )));
    }
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_try_parse_dates(true)
        .finish()
        .map_err(|e| {
            PolarsError::ComputeError(format!("read csv({}): {e}", path.display()).into())
        })?
        .collect()?;
    log::debug!("read {} rows from {}", df.height(), path.display());
    Ok(df)
}
