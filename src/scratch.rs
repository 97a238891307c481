//! Scratch directory for the CSV artifact shared between lessons.

use crate::error::PrimerError;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default scratch root.
pub const DATA_DIR_ENV: &str = "PRIMER_DATA_DIR";

const DEFAULT_ROOT: &str = "data/output";

/// Location of the scratch CSV written by the `csv_io` lesson and read by
/// the `contexts` and `combining` lessons.
#[derive(Debug, Clone)]
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ScratchDir { root: root.into() }
    }

    /// Resolve the scratch root from `PRIMER_DATA_DIR`, falling back to
    /// `data/output` relative to the working directory.
    pub fn from_env() -> Self {
        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => ScratchDir::new(dir),
            _ => ScratchDir::new(DEFAULT_ROOT),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the people CSV artifact.
    pub fn people_csv(&self) -> PathBuf {
        self.root.join("people.csv")
    }

    /// Create the scratch directory tree if it does not exist yet.
    pub fn ensure(&self) -> Result<(), PrimerError> {
        std::fs::create_dir_all(&self.root)?;
        Ok(())
    }
}

impl Default for ScratchDir {
    fn default() -> Self {
        Self::from_env()
    }
}
