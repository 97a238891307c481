//! Error type for the primer lessons.
//!
//! Use [`PrimerError`] to surface Polars and filesystem failures from the
//! lesson functions without exposing `PolarsError` to the binaries.

use polars::error::PolarsError;
use std::fmt;

/// Unified error type for primer operations.
#[derive(Debug)]
pub enum PrimerError {
    /// I/O error (file not found, permission, etc.).
    Io(String),
    /// Resource not found (column, file).
    NotFound(String),
    /// Compute error from the engine.
    Compute(String),
    /// Schema mismatch or schema (de)serialization error.
    Schema(String),
    /// Other / unclassified.
    Other(String),
}

impl fmt::Display for PrimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimerError::Io(s) => write!(f, "io error: {s}"),
            PrimerError::NotFound(s) => write!(f, "not found: {s}"),
            PrimerError::Compute(s) => write!(f, "compute error: {s}"),
            PrimerError::Schema(s) => write!(f, "schema error: {s}"),
            PrimerError::Other(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for PrimerError {}

impl From<PolarsError> for PrimerError {
    fn from(e: PolarsError) -> Self {
        let msg = e.to_string();
        match &e {
            PolarsError::ColumnNotFound(_) | PolarsError::SchemaFieldNotFound(_) => {
                PrimerError::NotFound(msg)
            }
            PolarsError::SchemaMismatch(_) | PolarsError::ShapeMismatch(_) => {
                PrimerError::Schema(msg)
            }
            PolarsError::ComputeError(_) | PolarsError::InvalidOperation(_) => {
                PrimerError::Compute(msg)
            }
            PolarsError::IO { .. } => PrimerError::Io(msg),
            _ => PrimerError::Other(msg),
        }
    }
}

impl From<std::io::Error> for PrimerError {
    fn from(e: std::io::Error) -> Self {
        PrimerError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for PrimerError {
    fn from(e: serde_json::Error) -> Self {
        PrimerError::Schema(e.to_string())
    }
}
