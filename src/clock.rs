use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid date: {0}")]
pub struct DateParseError(pub String);

/// Calendar clock handed to the service so "today" is explicit instead of
/// being re-read from the wall clock deep inside the policy code.
#[derive(Clone, Copy, Debug)]
pub enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(date) => date.and_time(NaiveTime::MIN).and_utc(),
        }
    }
}

/// Reduces a date-like string to a local calendar date. Accepts the canonical
/// `YYYY-MM-DD` key, RFC 3339 datetimes, and a few common slash forms.
pub fn normalize_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(&Local).date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(stamp.date());
    }
    for format in ["%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Ok(date);
        }
    }
    Err(DateParseError(input.to_string()))
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
