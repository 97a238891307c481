//! The Polars query contexts: select, with_columns, filter, group_by, and
//! a chained combination of all four, run over the people table.

use crate::error::PrimerError;
use polars::prelude::{all, col, cols, len, lit, DataFrame, Expr, IntoLazy};

/// Decade bucket of the birthdate column (1992 -> 1990).
fn decade() -> Expr {
    (col("birthdate").dt().year().floor_div(lit(10)) * lit(10)).alias("decade")
}

/// Select: slice out the birth year and derive BMI from weight and height.
pub fn select_birth_year_and_bmi(df: &DataFrame) -> Result<DataFrame, PrimerError> {
    let out = df
        .clone()
        .lazy()
        .select([
            col("name"),
            col("birthdate").dt().year().alias("birth_year"),
            (col("weight") / (col("height") * col("height"))).alias("bmi"),
        ])
        .collect()?;
    Ok(out)
}

/// Expression expansion: one expression manipulates weight and height
/// alike, renaming the outputs with a suffix.
pub fn discount_weight_height(df: &DataFrame) -> Result<DataFrame, PrimerError> {
    let out = df
        .clone()
        .lazy()
        .select([
            col("name"),
            (cols(["weight", "height"]) * lit(0.95))
                .round(2)
                .name()
                .suffix("-5%"),
        ])
        .collect()?;
    Ok(out)
}

/// with_columns: the same derivations, appended to the existing frame
/// instead of replacing it.
pub fn with_birth_year_and_bmi(df: &DataFrame) -> Result<DataFrame, PrimerError> {
    let out = df
        .clone()
        .lazy()
        .with_columns([
            col("birthdate").dt().year().alias("birth_year"),
            (col("weight") / (col("height") * col("height"))).alias("bmi"),
        ])
        .collect()?;
    Ok(out)
}

/// Filter: rows whose birth year is strictly before `year`.
pub fn born_before(df: &DataFrame, year: i32) -> Result<DataFrame, PrimerError> {
    let out = df
        .clone()
        .lazy()
        .filter(col("birthdate").dt().year().lt(lit(year)))
        .collect()?;
    Ok(out)
}

/// Filter with two predicates ANDed: born after `year` and taller than
/// `min_height`.
pub fn tall_and_born_after(
    df: &DataFrame,
    year: i32,
    min_height: f64,
) -> Result<DataFrame, PrimerError> {
    let out = df
        .clone()
        .lazy()
        .filter(
            col("birthdate")
                .dt()
                .year()
                .gt(lit(year))
                .and(col("height").gt(lit(min_height))),
        )
        .collect()?;
    Ok(out)
}

/// Group by the derived decade and count rows per group. Grouping is
/// order-preserving: groups come out in first-seen order.
pub fn decade_counts(df: &DataFrame) -> Result<DataFrame, PrimerError> {
    let out = df
        .clone()
        .lazy()
        .group_by_stable([decade()])
        .agg([len()])
        .collect()?;
    Ok(out)
}

/// Group by decade with a count, a rounded mean weight and the max height.
pub fn decade_stats(df: &DataFrame) -> Result<DataFrame, PrimerError> {
    let out = df
        .clone()
        .lazy()
        .group_by_stable([decade()])
        .agg([
            len().alias("sample_size"),
            col("weight").mean().round(2).alias("avg_weight"),
            col("height").max().alias("tallest"),
        ])
        .collect()?;
    Ok(out)
}

/// All contexts chained: derive decade and first name, drop the source
/// columns, group by decade, aggregate weight/height stats, and order the
/// output columns.
pub fn decade_report(df: &DataFrame) -> Result<DataFrame, PrimerError> {
    let out = df
        .clone()
        .lazy()
        .with_columns([
            decade(),
            col("name")
                .str()
                .split(lit(" "))
                .list()
                .first()
                .alias("first_name"),
        ])
        .select([all().exclude(["birthdate", "name"])])
        .group_by_stable([col("decade")])
        .agg([
            col("first_name"),
            cols(["weight", "height"]).mean().round(2).name().prefix("avg_"),
            cols(["weight", "height"]).max().round(2).name().prefix("max_"),
            cols(["weight", "height"]).min().round(2).name().prefix("min_"),
        ])
        .select([
            col("decade"),
            col("first_name"),
            col("avg_weight"),
            col("min_weight"),
            col("max_weight"),
            col("avg_height"),
            col("min_height"),
            col("max_height"),
        ])
        .collect()?;
    Ok(out)
}
