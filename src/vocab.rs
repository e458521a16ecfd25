//! Fixed vocabularies behind the interactive filter prompts.
//!
//! All parsing trims surrounding whitespace and ignores case.
//! Display forms are the title-case names used in prompts and reports.

use std::fmt;

/// A city with a known dataset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// File name of the backing dataset, resolved under the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn parse(s: &str) -> Option<City> {
        match s.trim().to_lowercase().as_str() {
            "chicago" => Some(City::Chicago),
            "new york city" => Some(City::NewYorkCity),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        write!(f, "{name}")
    }
}

/// A month that the datasets cover.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// Calendar number of the month, 1 through 6.
    pub fn number(self) -> i32 {
        self as i32
    }

    pub fn from_number(n: i64) -> Option<Month> {
        Month::ALL.iter().copied().find(|m| i64::from(m.number()) == n)
    }

    pub fn parse(s: &str) -> Option<Month> {
        match s.trim().to_lowercase().as_str() {
            "january" => Some(Month::January),
            "february" => Some(Month::February),
            "march" => Some(Month::March),
            "april" => Some(Month::April),
            "may" => Some(Month::May),
            "june" => Some(Month::June),
            _ => None,
        }
    }

    /// Parse a month prompt answer: `Some(None)` means "all",
    /// `Some(Some(m))` a single month, `None` an invalid answer.
    pub fn parse_filter(s: &str) -> Option<Option<Month>> {
        if s.trim().eq_ignore_ascii_case("all") {
            Some(None)
        } else {
            Month::parse(s).map(Some)
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A day of the week.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Full English name, matching the derived weekday column.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn parse(s: &str) -> Option<Weekday> {
        let s = s.trim();
        Weekday::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s))
    }

    /// Parse a day prompt answer: `Some(None)` means "all",
    /// `Some(Some(d))` a single day, `None` an invalid answer.
    pub fn parse_filter(s: &str) -> Option<Option<Weekday>> {
        if s.trim().eq_ignore_ascii_case("all") {
            Some(None)
        } else {
            Weekday::parse(s).map(Some)
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which time filters the user wants to apply.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FilterMode {
    Month,
    Day,
    Both,
    None,
}

impl FilterMode {
    pub const ALL: [FilterMode; 4] = [
        FilterMode::Month,
        FilterMode::Day,
        FilterMode::Both,
        FilterMode::None,
    ];

    pub fn parse(s: &str) -> Option<FilterMode> {
        match s.trim().to_lowercase().as_str() {
            "month" => Some(FilterMode::Month),
            "day" => Some(FilterMode::Day),
            "both" => Some(FilterMode::Both),
            "none" => Some(FilterMode::None),
            _ => None,
        }
    }

    pub fn asks_month(self) -> bool {
        matches!(self, FilterMode::Month | FilterMode::Both)
    }

    pub fn asks_day(self) -> bool {
        matches!(self, FilterMode::Day | FilterMode::Both)
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            FilterMode::Month => "Month",
            FilterMode::Day => "Day",
            FilterMode::Both => "Both",
            FilterMode::None => "None",
        };
        write!(f, "{name}")
    }
}

/// The normalized outcome of filter collection. `month` and `day` are
/// `None` when that axis is unrestricted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FilterSelection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}
