//! Schema introspection and dtype overrides.
//!
//! [`SchemaOutline`] is a serializable view of a frame's schema, restricted
//! to the column types the lessons use; [`override_dtypes`] re-types named
//! columns by casting.

use crate::error::PrimerError;
use polars::prelude::{DataFrame, DataType as PlDataType, Schema};
use serde::{Deserialize, Serialize};

/// Column types the primer lessons work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    String,
    Long,
    UnsignedLong,
    UnsignedByte,
    Double,
    Boolean,
    Date,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub column_type: ColumnType,
}

impl FieldSpec {
    pub fn new(name: String, column_type: ColumnType) -> Self {
        FieldSpec { name, column_type }
    }
}

/// Ordered schema description of a frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaOutline {
    fields: Vec<FieldSpec>,
}

impl SchemaOutline {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        SchemaOutline { fields }
    }

    /// Read the outline off a frame's schema.
    pub fn from_frame(df: &DataFrame) -> Self {
        let fields = df
            .schema()
            .iter()
            .map(|(name, dtype)| FieldSpec {
                name: name.to_string(),
                column_type: polars_type_to_column_type(dtype),
            })
            .collect();
        SchemaOutline { fields }
    }

    pub fn to_polars_schema(&self) -> Schema {
        use polars::prelude::Field;
        let fields: Vec<Field> = self
            .fields
            .iter()
            .map(|f| Field::new(f.name.as_str().into(), column_type_to_polars_type(f.column_type)))
            .collect();
        Schema::from_iter(fields)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn to_json(&self) -> Result<String, PrimerError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, PrimerError> {
        Ok(serde_json::from_str(raw)?)
    }
}

fn polars_type_to_column_type(dtype: &PlDataType) -> ColumnType {
    match dtype {
        PlDataType::String => ColumnType::String,
        PlDataType::Int32 | PlDataType::Int64 => ColumnType::Long,
        PlDataType::UInt8 => ColumnType::UnsignedByte,
        PlDataType::UInt32 | PlDataType::UInt64 => ColumnType::UnsignedLong,
        PlDataType::Float32 | PlDataType::Float64 => ColumnType::Double,
        PlDataType::Boolean => ColumnType::Boolean,
        PlDataType::Date => ColumnType::Date,
        _ => ColumnType::String, // fallback for dtypes outside the lessons
    }
}

fn column_type_to_polars_type(column_type: ColumnType) -> PlDataType {
    match column_type {
        ColumnType::String => PlDataType::String,
        ColumnType::Long => PlDataType::Int64,
        ColumnType::UnsignedLong => PlDataType::UInt64,
        ColumnType::UnsignedByte => PlDataType::UInt8,
        ColumnType::Double => PlDataType::Float64,
        ColumnType::Boolean => PlDataType::Boolean,
        ColumnType::Date => PlDataType::Date,
    }
}

/// Re-type named columns by casting. The construction-time
/// `schema_overrides` idiom, applied after the fact.
pub fn override_dtypes(
    df: &DataFrame,
    overrides: &[(&str, PlDataType)],
) -> Result<DataFrame, PrimerError> {
    use polars::prelude::{col, IntoLazy};
    let exprs: Vec<_> = overrides
        .iter()
        .map(|(name, dtype)| col(*name).cast(dtype.clone()))
        .collect();
    let out = df.clone().lazy().with_columns(exprs).collect()?;
    Ok(out)
}
