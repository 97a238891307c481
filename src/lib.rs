//! polars-primer - guided lessons for the Polars dataframe engine.
//!
//! Each lesson lives in its own module and has a matching binary under
//! `src/bin/`: CSV input/output, data types and schemas, the query
//! contexts, and combining frames. The lessons share one scratch CSV
//! artifact, written by `csv_io` and read by `contexts` and `combining`.

pub mod combining;
pub mod contexts;
pub mod csv_io;
pub mod data_types;
pub mod error;
pub mod people;
pub mod schema;
pub mod scratch;

pub use error::PrimerError;
pub use schema::{ColumnType, FieldSpec, SchemaOutline};
pub use scratch::ScratchDir;
