use bikeshare::errors::Result;
use bikeshare::vocab::{City, FilterMode, FilterSelection, Month, Weekday};
use bikeshare::{browse, load, output, stats};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use itertools::Itertools;
use log::error;
use polars::prelude::DataFrame;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

/// Explore US bikeshare trip data interactively
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory containing the city data files
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn prompt_city() -> Result<City> {
    let answer: String = cliclack::input(format!(
        "Which city would you like to explore? ({})",
        City::ALL.iter().join(", ")
    ))
    .validate(|answer: &String| match City::parse(answer) {
        Some(_) => Ok(()),
        None => Err("Please choose Chicago, New York City or Washington"),
    })
    .interact()?;
    Ok(City::parse(&answer).expect("validated input"))
}

fn prompt_mode() -> Result<FilterMode> {
    let answer: String = cliclack::input(format!(
        "How would you like to filter the data? ({})",
        FilterMode::ALL.iter().join(", ")
    ))
    .validate(|answer: &String| match FilterMode::parse(answer) {
        Some(_) => Ok(()),
        None => Err("Please answer Month, Day, Both or None"),
    })
    .interact()?;
    Ok(FilterMode::parse(&answer).expect("validated input"))
}

fn prompt_month() -> Result<Option<Month>> {
    let answer: String = cliclack::input(format!(
        "Which month? ({}, or All)",
        Month::ALL.iter().join(", ")
    ))
    .validate(|answer: &String| match Month::parse_filter(answer) {
        Some(_) => Ok(()),
        None => Err("Please name a month from January to June, or All"),
    })
    .interact()?;
    Ok(Month::parse_filter(&answer).expect("validated input"))
}

fn prompt_day() -> Result<Option<Weekday>> {
    let answer: String = cliclack::input(format!(
        "Which day? ({}, or All)",
        Weekday::ALL.iter().join(", ")
    ))
    .validate(|answer: &String| match Weekday::parse_filter(answer) {
        Some(_) => Ok(()),
        None => Err("Please name a day of the week, or All"),
    })
    .interact()?;
    Ok(Weekday::parse_filter(&answer).expect("validated input"))
}

fn describe_selection(selection: &FilterSelection) -> String {
    let month = selection
        .month
        .map_or_else(|| "All".to_owned(), |m| m.to_string());
    let day = selection
        .day
        .map_or_else(|| "All".to_owned(), |d| d.to_string());
    format!("city: {}\nmonth: {month}\nday: {day}", selection.city)
}

fn collect_filters() -> Result<FilterSelection> {
    let city = prompt_city()?;
    let mode = prompt_mode()?;
    let month = if mode.asks_month() {
        prompt_month()?
    } else {
        None
    };
    let day = if mode.asks_day() { prompt_day()? } else { None };
    let selection = FilterSelection { city, month, day };
    cliclack::note("Applying filters", describe_selection(&selection))?;
    Ok(selection)
}

fn report<T>(
    title: &str,
    compute: impl FnOnce() -> Result<T>,
    render: impl FnOnce(&T) -> String,
) -> Result<()> {
    let started = Instant::now();
    let value = compute()?;
    let body = render(&value);
    let elapsed = started.elapsed().as_secs_f64();
    cliclack::note(title, format!("{body}\nThis took {elapsed:.4} seconds."))?;
    Ok(())
}

fn print_reports(df: &DataFrame) -> Result<()> {
    report(
        "Most frequent times of travel",
        || stats::time_stats(df),
        output::render_time_stats,
    )?;
    report(
        "Most popular stations and trip",
        || stats::station_stats(df),
        output::render_station_stats,
    )?;
    report(
        "Trip duration",
        || stats::duration_stats(df),
        output::render_duration_stats,
    )?;
    report(
        "User stats",
        || stats::user_stats(df),
        output::render_user_stats,
    )?;
    Ok(())
}

fn browse_raw_data(df: &DataFrame) -> Result<()> {
    let windows = browse::window_count(df.height());
    for index in 0..windows {
        let question = if index == 0 {
            "Would you like to see 5 rows of raw trip data?"
        } else {
            "Would you like to see 5 more rows?"
        };
        if !cliclack::confirm(question).interact()? {
            return Ok(());
        }
        if let Some(window) = browse::window(df, index) {
            let first = index * browse::PAGE_SIZE + 1;
            let last = index * browse::PAGE_SIZE + window.height();
            cliclack::note(
                format!("Trips {first} to {last} of {}", df.height()),
                browse::render_window(&window)?,
            )?;
        }
    }
    cliclack::log::info("That is all of the raw data.")?;
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    cliclack::intro("bikeshare")?;
    cliclack::log::info("Let's explore some US bikeshare data!")?;
    loop {
        let selection = collect_filters()?;
        let df = load::load_trips(&args.data_dir, &selection)?;
        print_reports(&df)?;
        browse_raw_data(&df)?;
        let restart = cliclack::confirm("Would you like to restart?")
            .initial_value(false)
            .interact()?;
        if !restart {
            break;
        }
    }
    cliclack::outro("Good bye!")?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match run(&args) {
        Ok(()) => (),
        Err(e) => {
            error!(target: "bikeshare", "{e}");
            process::exit(1);
        }
    }
}
