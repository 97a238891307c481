//! Series construction and frame inspection.

use crate::error::PrimerError;
use polars::prelude::{DataFrame, DataType, NamedFrom, Series};

/// A named series with the dtype inferred from its values (Int64 here).
pub fn int_series() -> Series {
    Series::new("ints".into(), &[1i64, 2, 3, 4, 5])
}

/// The same values with the inference overridden to an unsigned dtype.
pub fn uint_series() -> Result<Series, PrimerError> {
    let s = Series::new("uints".into(), &[1i64, 2, 3, 4, 5]).cast(&DataType::UInt64)?;
    Ok(s)
}

/// First n rows.
pub fn preview(df: &DataFrame, n: usize) -> DataFrame {
    df.head(Some(n))
}

/// Last n rows.
pub fn tail(df: &DataFrame, n: usize) -> DataFrame {
    df.tail(Some(n))
}

/// n randomly selected rows, deterministic for a given seed.
pub fn sample(df: &DataFrame, n: usize, seed: u64) -> Result<DataFrame, PrimerError> {
    let out = df.sample_n_literal(n, false, false, Some(seed))?;
    Ok(out)
}

/// Summary statistics (count, null_count, mean, std, min, max) for each
/// numeric column, one statistic per row.
pub fn describe(df: &DataFrame) -> Result<DataFrame, PrimerError> {
    use polars::prelude::*;
    let mut columns: Vec<Column> = vec![Column::new(
        "statistic".into(),
        &["count", "null_count", "mean", "std", "min", "max"],
    )];
    for column in df.get_columns() {
        if !is_numeric(column.dtype()) {
            continue;
        }
        let s = column.as_materialized_series().cast(&DataType::Float64)?;
        let ca = s.f64()?;
        let values = [
            Some(s.len() as f64),
            Some(s.null_count() as f64),
            ca.mean(),
            ca.std(1),
            ca.min(),
            ca.max(),
        ];
        columns.push(Column::new(column.name().clone(), &values));
    }
    let out = DataFrame::new(columns)?;
    Ok(out)
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Column-per-line summary: name, dtype and the leading values. The
/// transposed counterpart of [`preview`] for wide frames.
pub fn glimpse(df: &DataFrame, max_values: usize) -> Result<String, PrimerError> {
    let mut out = format!("rows: {}, columns: {}\n", df.height(), df.width());
    let take = max_values.min(df.height());
    for column in df.get_columns() {
        let mut values = Vec::with_capacity(take);
        for i in 0..take {
            values.push(column.get(i)?.to_string());
        }
        out.push_str(&format!(
            "$ {} <{}> {}\n",
            column.name(),
            column.dtype(),
            values.join(", ")
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::people;

    #[test]
    fn series_dtypes() {
        assert_eq!(int_series().dtype(), &DataType::Int64);
        assert_eq!(uint_series().unwrap().dtype(), &DataType::UInt64);
    }

    #[test]
    fn preview_and_tail_row_counts() {
        let df = people::people().unwrap();
        assert_eq!(preview(&df, 3).height(), 3);
        assert_eq!(tail(&df, 2).height(), 2);
        // asking for more rows than exist is not an error
        assert_eq!(preview(&df, 10).height(), 4);
    }

    #[test]
    fn sample_is_seeded() {
        let df = people::people().unwrap();
        let a = sample(&df, 2, 42).unwrap();
        let b = sample(&df, 2, 42).unwrap();
        assert_eq!(a.height(), 2);
        assert!(a.equals(&b), "same seed should give the same rows");
    }

    #[test]
    fn glimpse_lists_every_column() {
        let df = people::people().unwrap();
        let text = glimpse(&df, 2).unwrap();
        for name in df.get_column_names_str() {
            assert!(text.contains(name), "glimpse output missing column {name}");
        }
        assert!(text.starts_with("rows: 4, columns: 4"));
    }

    #[test]
    fn describe_summarizes_numeric_columns() {
        let df = people::people().unwrap();
        let stats = describe(&df).unwrap();
        assert_eq!(
            stats.get_column_names_str(),
            &["statistic", "weight", "height"]
        );
        assert_eq!(stats.height(), 6);
        // mean is the third statistic row; fixture mean weight is 267.1 / 4
        let mean_weight = stats
            .column("weight")
            .unwrap()
            .get(2)
            .unwrap()
            .try_extract::<f64>()
            .unwrap();
        assert!((mean_weight - 66.775).abs() < 1e-9);
    }
}
