//! Statistics reports over a filtered trip table.
//!
//! "Most frequent" is deterministic. Groups are formed in first-encounter
//! order and the count sort is stable, so among equally frequent values
//! the one appearing first in the table wins.

use crate::errors::{invalid_data, invalid_data_ref, Result};
use crate::schema::{derived, trip};
use crate::vocab::{Month, Weekday};
use polars::prelude::*;

const COUNT: &str = "count";
const TRIP: &str = "Trip";

/// Separator between the start and end station of a trip.
pub const TRIP_DELIMITER: &str = " (to) ";

/// Most frequent times of travel.
#[derive(Debug, Eq, PartialEq)]
pub struct TimeStats {
    pub month: Month,
    pub weekday: Weekday,
    pub hour: u8,
}

/// Most popular stations and trip.
#[derive(Debug, Eq, PartialEq)]
pub struct StationStats {
    pub start: String,
    pub end: String,
    pub trip: String,
}

/// Total and mean trip duration, truncated to whole seconds.
#[derive(Debug, Eq, PartialEq)]
pub struct DurationStats {
    pub total_seconds: i64,
    pub mean_seconds: i64,
}

/// Gender breakdown, where the dataset records one.
#[derive(Debug, Eq, PartialEq)]
pub struct GenderStats {
    pub counts: Vec<(String, u64)>,
    pub coverage_pct: i64,
}

/// Birth year summary, where the dataset records one.
#[derive(Debug, Eq, PartialEq)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
    pub coverage_pct: i64,
}

/// User breakdown. `gender` and `birth_year` are `None` for datasets
/// without those columns.
#[derive(Debug, Eq, PartialEq)]
pub struct UserStats {
    pub user_types: Vec<(String, u64)>,
    pub gender: Option<GenderStats>,
    pub birth_year: Option<BirthYearStats>,
}

/// Frequency counts for one column, nulls excluded, most frequent first.
/// Equal counts keep first-occurrence order.
pub fn value_counts(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let counts = df
        .clone()
        .lazy()
        .filter(col(column).is_not_null())
        .group_by_stable([col(column)])
        .agg([len().alias(COUNT)])
        .sort(
            [COUNT],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .collect()?;
    Ok(counts)
}

pub fn time_stats(df: &DataFrame) -> Result<TimeStats> {
    require_rows(df)?;
    let month_number = most_frequent_value(df, derived::MONTH)?;
    let month = Month::from_number(month_number)
        .ok_or_else(|| invalid_data(format!("unsupported month number {month_number}")))?;
    let weekday_name = most_frequent_label(df, derived::WEEKDAY)?;
    let weekday = Weekday::parse(&weekday_name)
        .ok_or_else(|| invalid_data(format!("unexpected weekday name '{weekday_name}'")))?;
    let hour = most_frequent_value(df, derived::HOUR)? as u8;
    Ok(TimeStats {
        month,
        weekday,
        hour,
    })
}

pub fn station_stats(df: &DataFrame) -> Result<StationStats> {
    require_rows(df)?;
    let start = most_frequent_label(df, trip::START_STATION)?;
    let end = most_frequent_label(df, trip::END_STATION)?;
    let trips = df
        .clone()
        .lazy()
        .select([concat_str(
            [col(trip::START_STATION), col(trip::END_STATION)],
            TRIP_DELIMITER,
            false,
        )
        .alias(TRIP)])
        .collect()?;
    let trip = most_frequent_label(&trips, TRIP)?;
    Ok(StationStats { start, end, trip })
}

pub fn duration_stats(df: &DataFrame) -> Result<DurationStats> {
    require_rows(df)?;
    let durations = df.column(trip::TRIP_DURATION)?.as_materialized_series();
    let total = durations.sum_reduce()?.value().try_extract::<f64>()?;
    let mean = durations.mean_reduce().value().try_extract::<f64>()?;
    // truncated toward zero, not rounded
    Ok(DurationStats {
        total_seconds: total as i64,
        mean_seconds: mean as i64,
    })
}

pub fn user_stats(df: &DataFrame) -> Result<UserStats> {
    require_rows(df)?;
    let user_types = count_pairs(df, trip::USER_TYPE)?;
    let schema = df.schema();
    let gender = if schema.contains(trip::GENDER) {
        Some(GenderStats {
            counts: count_pairs(df, trip::GENDER)?,
            coverage_pct: coverage_pct(df, trip::GENDER)?,
        })
    } else {
        None
    };
    let birth_year = if schema.contains(trip::BIRTH_YEAR) {
        let years = df.column(trip::BIRTH_YEAR)?.as_materialized_series();
        Some(BirthYearStats {
            earliest: years.min_reduce()?.value().try_extract::<f64>()? as i64,
            most_recent: years.max_reduce()?.value().try_extract::<f64>()? as i64,
            most_common: most_frequent_value(df, trip::BIRTH_YEAR)?,
            coverage_pct: coverage_pct(df, trip::BIRTH_YEAR)?,
        })
    } else {
        None
    };
    Ok(UserStats {
        user_types,
        gender,
        birth_year,
    })
}

fn require_rows(df: &DataFrame) -> Result<()> {
    if df.height() == 0 {
        Err(invalid_data_ref("no trips match the selected filters"))
    } else {
        Ok(())
    }
}

fn most_frequent_value(df: &DataFrame, column: &str) -> Result<i64> {
    let counts = value_counts(df, column)?;
    if counts.height() == 0 {
        return Err(no_values(column));
    }
    let value = counts
        .column(column)?
        .as_materialized_series()
        .get(0)?
        .try_extract::<i64>()?;
    Ok(value)
}

fn most_frequent_label(df: &DataFrame, column: &str) -> Result<String> {
    let counts = value_counts(df, column)?;
    if counts.height() == 0 {
        return Err(no_values(column));
    }
    match counts.column(column)?.as_materialized_series().str()?.get(0) {
        Some(label) => Ok(label.to_owned()),
        None => Err(no_values(column)),
    }
}

fn no_values(column: &str) -> Box<dyn std::error::Error> {
    invalid_data(format!("column '{column}' has no values"))
}

/// Frequency counts as (label, count) pairs, most frequent first.
fn count_pairs(df: &DataFrame, column: &str) -> Result<Vec<(String, u64)>> {
    let counts = value_counts(df, column)?;
    let labels = counts.column(column)?.as_materialized_series().str()?;
    let ns = counts.column(COUNT)?.as_materialized_series().u32()?;
    Ok(labels
        .into_no_null_iter()
        .zip(ns.into_no_null_iter())
        .map(|(label, n)| (label.to_owned(), u64::from(n)))
        .collect())
}

/// Percentage of rows with a value in the column, truncated to an integer.
fn coverage_pct(df: &DataFrame, column: &str) -> Result<i64> {
    let s = df.column(column)?.as_materialized_series();
    let non_missing = (s.len() - s.null_count()) as f64;
    Ok((100.0 * non_missing / df.height() as f64) as i64)
}
