//! Lesson 4: left join and vertical concatenation, run against the CSV
//! artifact written by the csv_io lesson.

use polars_primer::combining::{concat_rows, left_join_on_name};
use polars_primer::csv_io::read_csv_with_dates;
use polars_primer::people;
use polars_primer::{PrimerError, ScratchDir};

fn main() -> Result<(), PrimerError> {
    env_logger::init();

    let path = ScratchDir::from_env().people_csv();
    log::info!("reading people table from {}", path.display());
    let df = read_csv_with_dates(&path)?;

    let households = people::households()?;
    println!("{}", left_join_on_name(&df, &households)?);

    let newcomers = people::more_people()?;
    println!("{}", concat_rows(&df, &newcomers)?);

    Ok(())
}
