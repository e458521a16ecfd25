//! Errors and error-related utilities.

use std::{error, fmt, result};

/// The result type used throughout this library.
pub type Result<T> = result::Result<T, Box<dyn error::Error>>;

/// A column that a city dataset is required to have is absent.
#[derive(Debug)]
pub struct MissingColumn(pub String);

/// Loaded data that cannot support the requested report.
#[derive(Debug)]
pub struct InvalidData(pub String);

impl fmt::Display for MissingColumn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "missing column: {}", self.0)
    }
}

impl fmt::Display for InvalidData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid data: {}", self.0)
    }
}

impl error::Error for MissingColumn {}

impl error::Error for InvalidData {}

/// A helper for constructing [MissingColumn].
pub fn missing_column(s: &str) -> Box<dyn error::Error> {
    MissingColumn(s.to_owned()).into()
}

/// A helper for constructing [InvalidData].
pub fn invalid_data(s: String) -> Box<dyn error::Error> {
    InvalidData(s).into()
}

/// A helper for constructing [InvalidData].
pub fn invalid_data_ref(s: &str) -> Box<dyn error::Error> {
    InvalidData(s.to_owned()).into()
}
