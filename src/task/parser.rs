//! Parsing of raw form input into typed task values
//!
//! Both front-ends collect strings (text inputs, `<input type="date">`,
//! `<select>`), so every conversion lives here and fails with an
//! [`InputError`] that can be shown to the user as-is.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a task description.")]
    EmptyDescription,

    #[error("'{0}' is not a valid date (expected YYYY-MM-DD).")]
    InvalidDate(String),

    #[error("'{0}' is not a valid time (expected HH:MM).")]
    InvalidTime(String),

    #[error("'{0}' is not a priority (expected Low, Medium or High).")]
    InvalidPriority(String),

    #[error("'{0}' is not an editable field.")]
    InvalidField(String),

    #[error("'{0}' is not a task number (expected a whole number of 1 or more).")]
    InvalidPosition(String),
}

/// Parse an optional `YYYY-MM-DD` date. Blank input means "no date".
pub fn parse_date(raw: &str) -> Result<Option<NaiveDate>, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| InputError::InvalidDate(raw.to_string()))
}

/// Parse an optional `HH:MM` (or `HH:MM:SS`) time of day. Blank input means
/// "no time".
pub fn parse_time(raw: &str) -> Result<Option<NaiveTime>, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map(Some)
        .map_err(|_| InputError::InvalidTime(raw.to_string()))
}

/// Parse a 1-based task number.
pub fn parse_position(raw: &str) -> Result<usize, InputError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(InputError::InvalidPosition(raw.trim().to_string())),
    }
}

pub fn parse_priority(raw: &str) -> Result<super::Priority, InputError> {
    super::Priority::parse(raw).ok_or_else(|| InputError::InvalidPriority(raw.trim().to_string()))
}

pub fn parse_field(raw: &str) -> Result<super::TaskField, InputError> {
    super::TaskField::parse(raw).ok_or_else(|| InputError::InvalidField(raw.trim().to_string()))
}
