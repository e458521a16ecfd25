//! Loading, time derivation and filtering of city datasets.

use crate::errors::{missing_column, Result};
use crate::schema::{derived, trip};
use crate::vocab::FilterSelection;
use itertools::Itertools;
use log::info;
use polars::prelude::*;
use std::path::Path;

const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Load the selected city's dataset, derive the month, weekday and hour
/// columns from the start time and apply the selected filters.
/// Row order is preserved from the file.
pub fn load_trips(data_dir: &Path, selection: &FilterSelection) -> Result<DataFrame> {
    let path = data_dir.join(selection.city.file_name());
    info!(target: "bikeshare", "read: {}", path.display());
    let raw = read_city_csv(&path)?;
    require_columns(&raw, &trip::REQUIRED)?;
    let df = derive_time_columns(raw)?;
    let df = apply_filters(df, selection)?;
    info!(
        target: "bikeshare",
        "{}: {} trips after filtering", selection.city, df.height()
    );
    Ok(df)
}

fn read_city_csv(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(df)
}

fn require_columns(df: &DataFrame, required: &[&str]) -> Result<()> {
    let schema = df.schema();
    let missing = required
        .iter()
        .filter(|&&name| !schema.contains(name))
        .join(", ");
    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing_column(&missing))
    }
}

/// Parse the start time in place and append the derived columns.
/// The trip duration is normalized to Float64; some datasets store it
/// with a decimal part.
fn derive_time_columns(df: DataFrame) -> Result<DataFrame> {
    let df = df
        .lazy()
        .with_columns([
            col(trip::START_TIME).str().to_datetime(
                Some(TimeUnit::Microseconds),
                None,
                StrptimeOptions {
                    format: Some(START_TIME_FORMAT.into()),
                    strict: true,
                    ..Default::default()
                },
                lit("raise"),
            ),
            col(trip::TRIP_DURATION).cast(DataType::Float64),
        ])
        .with_columns([
            col(trip::START_TIME)
                .dt()
                .month()
                .cast(DataType::Int32)
                .alias(derived::MONTH),
            col(trip::START_TIME)
                .dt()
                .to_string("%A")
                .alias(derived::WEEKDAY),
            col(trip::START_TIME)
                .dt()
                .hour()
                .cast(DataType::Int32)
                .alias(derived::HOUR),
        ])
        .collect()?;
    Ok(df)
}

fn apply_filters(df: DataFrame, selection: &FilterSelection) -> Result<DataFrame> {
    let mut lazy = df.lazy();
    if let Some(month) = selection.month {
        lazy = lazy.filter(col(derived::MONTH).eq(lit(month.number())));
    }
    if let Some(day) = selection.day {
        lazy = lazy.filter(col(derived::WEEKDAY).eq(lit(day.name())));
    }
    Ok(lazy.collect()?)
}
