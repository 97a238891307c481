//! Lesson 2: series, frame inspection, and schema introspection/overrides.

use polars::prelude::{df, DataType};
use polars_primer::data_types::{describe, glimpse, int_series, preview, sample, tail, uint_series};
use polars_primer::people;
use polars_primer::schema::{override_dtypes, SchemaOutline};
use polars_primer::PrimerError;

fn main() -> Result<(), PrimerError> {
    env_logger::init();

    // a series is a 1D homogeneous structure: rows of a single column
    let s = int_series();
    println!("{s}");
    let s2 = uint_series()?;
    println!("data types: {} {}", s.dtype(), s2.dtype());

    // frames are 2D and heterogeneous: rows and typed columns
    let df = people::people()?;
    println!("{df}");

    println!("{}", preview(&df, 3));
    println!("{}", glimpse(&df, 4)?);
    println!("{}", tail(&df, 2));
    println!("{}", sample(&df, 2, 42)?);
    println!("{}", describe(&df)?);

    let outline = SchemaOutline::from_frame(&df);
    log::info!("people schema outline: {}", outline.to_json()?);

    // override the inferred dtype of a single column
    let ages = df!(
        "name" => &["Alice", "Ben", "Chloe", "Daniel"],
        "age" => &[27i64, 39, 41, 43],
    )?;
    println!("{:?}", ages.schema());
    let ages = override_dtypes(&ages, &[("age", DataType::UInt8)])?;
    println!("{:?}", ages.schema());
    println!("{ages}");

    Ok(())
}
