//! Lesson 3: the query contexts, run against the CSV artifact written by
//! the csv_io lesson.

use polars_primer::contexts;
use polars_primer::csv_io::read_csv_with_dates;
use polars_primer::{PrimerError, ScratchDir};

fn main() -> Result<(), PrimerError> {
    env_logger::init();

    let path = ScratchDir::from_env().people_csv();
    log::info!("reading people table from {}", path.display());
    let df = read_csv_with_dates(&path)?;
    println!("{df}");

    println!("{}", contexts::select_birth_year_and_bmi(&df)?);
    println!("{}", contexts::discount_weight_height(&df)?);
    println!("{}", contexts::with_birth_year_and_bmi(&df)?);
    println!("{}", contexts::born_before(&df, 1990)?);
    println!("{}", contexts::tall_and_born_after(&df, 1990, 1.7)?);
    println!("{}", contexts::decade_counts(&df)?);
    println!("{}", contexts::decade_stats(&df)?);
    println!("{}", contexts::decade_report(&df)?);

    Ok(())
}
