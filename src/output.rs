//! Rendering statistics reports as printable text.

use crate::stats::{DurationStats, StationStats, TimeStats, UserStats};
use itertools::Itertools;

/// Render a whole number of seconds in hours, minutes and seconds.
pub fn pretty_duration(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = total_seconds % 3600 / 60;
    let seconds = total_seconds % 60;
    format!("{hours}h {minutes}m {seconds}s")
}

pub fn render_time_stats(stats: &TimeStats) -> String {
    format!(
        "Most common month: {}\n\
         Most common day of week: {}\n\
         Most common start hour: {}:00",
        stats.month, stats.weekday, stats.hour
    )
}

pub fn render_station_stats(stats: &StationStats) -> String {
    format!(
        "Most common start station: {}\n\
         Most common end station: {}\n\
         Most common trip: {}",
        stats.start, stats.end, stats.trip
    )
}

pub fn render_duration_stats(stats: &DurationStats) -> String {
    format!(
        "Total travel time: {} seconds ({})\n\
         Average travel time: {} seconds ({})",
        stats.total_seconds,
        pretty_duration(stats.total_seconds),
        stats.mean_seconds,
        pretty_duration(stats.mean_seconds)
    )
}

pub fn render_user_stats(stats: &UserStats) -> String {
    let mut lines = vec!["User types:".to_owned()];
    lines.extend(count_lines(&stats.user_types));
    match &stats.gender {
        Some(gender) => {
            lines.push("Gender:".to_owned());
            lines.extend(count_lines(&gender.counts));
            lines.push(format!(
                "Gender data available for {}% of trips",
                gender.coverage_pct
            ));
        }
        None => lines.push("No gender data available".to_owned()),
    }
    match &stats.birth_year {
        Some(birth_year) => {
            lines.push("Birth year:".to_owned());
            lines.push(format!("  Earliest: {}", birth_year.earliest));
            lines.push(format!("  Most recent: {}", birth_year.most_recent));
            lines.push(format!("  Most common: {}", birth_year.most_common));
            lines.push(format!(
                "Birth year data available for {}% of trips",
                birth_year.coverage_pct
            ));
        }
        None => lines.push("No birthyear data available".to_owned()),
    }
    lines.join("\n")
}

fn count_lines(counts: &[(String, u64)]) -> Vec<String> {
    counts
        .iter()
        .map(|(label, n)| format!("  {label}: {n}"))
        .collect_vec()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::stats::{BirthYearStats, GenderStats};
    use crate::vocab::{Month, Weekday};

    #[test]
    fn pretty_duration_basic() {
        assert_eq!(pretty_duration(0), "0h 0m 0s");
        assert_eq!(pretty_duration(59), "0h 0m 59s");
        assert_eq!(pretty_duration(60), "0h 1m 0s");
        assert_eq!(pretty_duration(3600), "1h 0m 0s");
        assert_eq!(pretty_duration(3667), "1h 1m 7s");
        assert_eq!(pretty_duration(90061), "25h 1m 1s");
    }

    #[test]
    fn time_stats_rendering() {
        let s = render_time_stats(&TimeStats {
            month: Month::June,
            weekday: Weekday::Monday,
            hour: 17,
        });
        assert_eq!(
            s,
            "Most common month: June\n\
             Most common day of week: Monday\n\
             Most common start hour: 17:00"
        );
    }

    #[test]
    fn station_stats_rendering() {
        let s = render_station_stats(&StationStats {
            start: "A".to_owned(),
            end: "B".to_owned(),
            trip: "A (to) B".to_owned(),
        });
        assert_eq!(
            s,
            "Most common start station: A\n\
             Most common end station: B\n\
             Most common trip: A (to) B"
        );
    }

    #[test]
    fn duration_stats_rendering() {
        let s = render_duration_stats(&DurationStats {
            total_seconds: 11024,
            mean_seconds: 918,
        });
        assert_eq!(
            s,
            "Total travel time: 11024 seconds (3h 3m 44s)\n\
             Average travel time: 918 seconds (0h 15m 18s)"
        );
    }

    #[test]
    fn user_stats_rendering_with_demographics() {
        let s = render_user_stats(&UserStats {
            user_types: vec![("Subscriber".to_owned(), 8), ("Customer".to_owned(), 4)],
            gender: Some(GenderStats {
                counts: vec![("Male".to_owned(), 6), ("Female".to_owned(), 4)],
                coverage_pct: 83,
            }),
            birth_year: Some(BirthYearStats {
                earliest: 1961,
                most_recent: 1992,
                most_common: 1985,
                coverage_pct: 83,
            }),
        });
        let expected = [
            "User types:",
            "  Subscriber: 8",
            "  Customer: 4",
            "Gender:",
            "  Male: 6",
            "  Female: 4",
            "Gender data available for 83% of trips",
            "Birth year:",
            "  Earliest: 1961",
            "  Most recent: 1992",
            "  Most common: 1985",
            "Birth year data available for 83% of trips",
        ]
        .join("\n");
        assert_eq!(s, expected);
    }

    #[test]
    fn user_stats_rendering_without_demographics() {
        let s = render_user_stats(&UserStats {
            user_types: vec![("Subscriber".to_owned(), 2), ("Customer".to_owned(), 1)],
            gender: None,
            birth_year: None,
        });
        let expected = [
            "User types:",
            "  Subscriber: 2",
            "  Customer: 1",
            "No gender data available",
            "No birthyear data available",
        ]
        .join("\n");
        assert_eq!(s, expected);
    }
}
