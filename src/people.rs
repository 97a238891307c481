//! Literal fixture tables used across the lessons.

use crate::error::PrimerError;
use chrono::NaiveDate;
use polars::prelude::{df, DataFrame};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("hard-coded date is valid")
}

/// The people table: name, birthdate, weight and height, four rows.
pub fn people() -> Result<DataFrame, PrimerError> {
    let df = df!(
        "name" => &["Alice Archer", "Bob Brown", "Chloey Cooper", "Daniel Donovan"],
        "birthdate" => &[
            date(1992, 1, 10),
            date(1992, 2, 15),
            date(1984, 5, 25),
            date(1999, 7, 4),
        ],
        "weight" => &[57.9f64, 72.5, 53.6, 83.1], // (kg)
        "height" => &[1.56f64, 1.77, 1.65, 1.75], // (m)
    )?;
    Ok(df)
}

/// Household facts keyed by name, the right-hand side of the join lesson.
pub fn households() -> Result<DataFrame, PrimerError> {
    let df = df!(
        "name" => &["Bob Brown", "Daniel Donovan", "Alice Archer", "Chloey Cooper"],
        "parent" => &[true, false, false, false],
        "siblings" => &[1i64, 2, 3, 4],
    )?;
    Ok(df)
}

/// Four more people with the people-table columns, for the concat lesson.
pub fn more_people() -> Result<DataFrame, PrimerError> {
    let df = df!(
        "name" => &["Ethan Edwards", "Fiona Foster", "Grace Gibson", "Henry Harris"],
        "birthdate" => &[
            date(1977, 5, 10),
            date(1975, 6, 23),
            date(1973, 7, 22),
            date(1971, 8, 3),
        ],
        "weight" => &[67.9f64, 72.5, 57.6, 93.1], // (kg)
        "height" => &[1.76f64, 1.6, 1.66, 1.8],   // (m)
    )?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;

    #[test]
    fn people_shape_and_dtypes() {
        let df = people().unwrap();
        assert_eq!(df.height(), 4);
        assert_eq!(
            df.get_column_names_str(),
            &["name", "birthdate", "weight", "height"]
        );
        assert_eq!(df.column("birthdate").unwrap().dtype(), &DataType::Date);
        assert_eq!(df.column("weight").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn more_people_matches_people_schema() {
        let a = people().unwrap();
        let b = more_people().unwrap();
        assert_eq!(a.get_column_names_str(), b.get_column_names_str());
    }

    #[test]
    fn households_shape() {
        let df = households().unwrap();
        assert_eq!(df.height(), 4);
        assert_eq!(df.get_column_names_str(), &["name", "parent", "siblings"]);
    }
}
