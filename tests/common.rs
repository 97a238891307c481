//! Shared fixtures and cell-extraction helpers for the integration suites.

use polars::prelude::DataFrame;
use polars_primer::people;

pub fn people_df() -> DataFrame {
    people::people().expect("people fixture")
}

#[allow(dead_code)]
pub fn households_df() -> DataFrame {
    people::households().expect("households fixture")
}

#[allow(dead_code)]
pub fn more_people_df() -> DataFrame {
    people::more_people().expect("more-people fixture")
}

#[allow(dead_code)]
pub fn f64_at(df: &DataFrame, column: &str, row: usize) -> f64 {
    df.column(column)
        .unwrap()
        .get(row)
        .unwrap()
        .try_extract::<f64>()
        .unwrap()
}

#[allow(dead_code)]
pub fn i64_at(df: &DataFrame, column: &str, row: usize) -> i64 {
    df.column(column)
        .unwrap()
        .get(row)
        .unwrap()
        .try_extract::<i64>()
        .unwrap()
}

#[allow(dead_code)]
pub fn str_at(df: &DataFrame, column: &str, row: usize) -> String {
    df.column(column)
        .unwrap()
        .get(row)
        .unwrap()
        .get_str()
        .unwrap()
        .to_string()
}
