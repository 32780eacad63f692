use std::fmt;

use chrono::{DateTime, NaiveDateTime};

/// Date-time text format shared by every front end: `yyyy-MM-dd HH:mm`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Example shown to users when their input doesn't parse.
pub const DATE_TIME_EXAMPLE: &str = "2024-12-25 14:30";

/// Format a departure time for display.
/// Example: 2024-12-25T14:30:00 -> "2024-12-25 14:30"
pub fn format_date_time(date_time: &NaiveDateTime) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}

/// Parse user input in the `yyyy-MM-dd HH:mm` format.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime, ParseDateTimeError> {
    NaiveDateTime::parse_from_str(input.trim(), DATE_TIME_FORMAT)
        .map_err(|_| ParseDateTimeError::InvalidFormat(input.trim().to_string()))
}

/// Lenient parsing for data files: the display format, ISO 8601 local
/// date-times with or without seconds, and RFC 3339 (offset discarded).
pub fn parse_date_time_lenient(input: &str) -> Result<NaiveDateTime, ParseDateTimeError> {
    let input = input.trim();

    if let Ok(dt) = parse_date_time(input) {
        return Ok(dt);
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_local());
    }

    Err(ParseDateTimeError::InvalidFormat(input.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDateTimeError {
    InvalidFormat(String),
}

impl fmt::Display for ParseDateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDateTimeError::InvalidFormat(input) => write!(
                f,
                "invalid date-time '{}', expected yyyy-MM-dd HH:mm (e.g., {})",
                input, DATE_TIME_EXAMPLE
            ),
        }
    }
}

impl std::error::Error for ParseDateTimeError {}
