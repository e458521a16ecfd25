/// Columns expected in every city CSV file.
pub mod trip {
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";

    /// Present in the Chicago and New York City datasets only.
    pub const GENDER: &str = "Gender";
    /// Present in the Chicago and New York City datasets only.
    pub const BIRTH_YEAR: &str = "Birth Year";

    pub const REQUIRED: [&str; 6] = [
        START_TIME,
        END_TIME,
        TRIP_DURATION,
        START_STATION,
        END_STATION,
        USER_TYPE,
    ];
}

/// Columns derived from the parsed start time on every load.
pub mod derived {
    /// Month number, 1 through 12.
    pub const MONTH: &str = "Month";
    /// Full English weekday name, "Monday" through "Sunday".
    pub const WEEKDAY: &str = "Weekday";
    /// Hour of day, 0 through 23.
    pub const HOUR: &str = "Hour";
}
