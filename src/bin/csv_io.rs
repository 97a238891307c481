//! Lesson 1: build the people table, write it to CSV, read it back with
//! date parsing.

use polars_primer::csv_io::{read_csv_with_dates, write_csv};
use polars_primer::people;
use polars_primer::{PrimerError, ScratchDir};

fn main() -> Result<(), PrimerError> {
    env_logger::init();

    let scratch = ScratchDir::from_env();
    scratch.ensure()?;
    let path = scratch.people_csv();

    let df = people::people()?;
    println!("{df}");

    log::info!("writing people table to {}", path.display());
    write_csv(&df, &path)?;

    let df_csv = read_csv_with_dates(&path)?;
    println!("{df_csv}");

    Ok(())
}
