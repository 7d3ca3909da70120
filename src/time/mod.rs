//! Time module for propagation epochs
//!
//! An [`Epoch`] is a UTC calendar timestamp. Propagators do not take calendar
//! dates directly; they take a [`JulianDate`] split into a whole day and a
//! fraction of a day so that precision is not lost in a single large float.

pub mod calendar;

use crate::constants::MINUTES_PER_DAY;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for time operations
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("Time out of range: {0}")]
    OutOfRange(String),

    #[error("Parsing error: {0}")]
    ParseError(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// A Julian date split into a whole day (ending in .5, i.e. midnight) and the
/// elapsed fraction of that day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JulianDate {
    pub day: f64,
    pub fraction: f64,
}

impl JulianDate {
    pub fn new(day: f64, fraction: f64) -> Self {
        Self { day, fraction }
    }

    /// The combined Julian date as a single float
    pub fn value(&self) -> f64 {
        self.day + self.fraction
    }

    /// Minutes elapsed from `other` to `self`
    ///
    /// Whole days and fractions are differenced separately before being added.
    pub fn minutes_since(&self, other: &JulianDate) -> f64 {
        ((self.day - other.day) + (self.fraction - other.fraction)) * MINUTES_PER_DAY
    }
}

/// A UTC calendar timestamp used as propagation target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Epoch {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

impl Epoch {
    /// Create a validated epoch from calendar components
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Result<Self> {
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(TimeError::InvalidDate(format!(
                "{:04}-{:02}-{:02}",
                year, month, day
            )));
        }
        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(TimeError::OutOfRange(format!(
                "{:02}:{:02}:{}",
                hour, minute, second
            )));
        }

        Ok(Self::from_components(year, month, day, hour, minute, second))
    }

    /// Calendar components taken as given, for compile-time constants known to be valid
    pub(crate) const fn from_components(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Create an epoch from a UTC datetime
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self::from_naive(&dt.naive_utc())
    }

    /// Create an epoch from a naive datetime interpreted as UTC
    pub fn from_naive(dt: &NaiveDateTime) -> Self {
        // chrono encodes a leap second as nanosecond >= 1e9; clamp into the minute
        let nanos = dt.nanosecond().min(999_999_999);
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + nanos as f64 / 1_000_000_000.0,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> f64 {
        self.second
    }

    /// Split Julian date of this epoch
    pub fn julian_date(&self) -> JulianDate {
        JulianDate {
            day: calendar::midnight_julian_date(self.year, self.month, self.day),
            fraction: calendar::day_fraction(self.hour, self.minute, self.second),
        }
    }
}

impl From<DateTime<Utc>> for Epoch {
    fn from(dt: DateTime<Utc>) -> Self {
        Epoch::from_datetime(&dt)
    }
}

impl FromStr for Epoch {
    type Err = TimeError;

    /// Accepts RFC 3339 timestamps as well as `YYYY-MM-DDTHH:MM:SS[.f]` and
    /// `YYYY-MM-DD HH:MM:SS[.f]`, the latter two read as UTC
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Epoch::from_datetime(&dt.with_timezone(&Utc)));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Epoch::from_naive(&dt));
            }
        }

        Err(TimeError::ParseError(format!(
            "'{}' is not a UTC timestamp (expected YYYY-MM-DDTHH:MM:SS)",
            s
        )))
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    #[test]
    fn test_julian_split_matches_reference_epoch() {
        let epoch = Epoch::new(2025, 10, 16, 12, 0, 0.0).unwrap();
        let jd = epoch.julian_date();
        assert_eq!(jd.day, 2460964.5);
        assert_eq!(jd.fraction, 0.5);
        assert_eq!(jd.value(), 2460965.0);
    }

    #[test]
    fn test_invalid_components() {
        assert!(matches!(
            Epoch::new(2025, 2, 30, 0, 0, 0.0),
            Err(TimeError::InvalidDate(_))
        ));
        assert!(matches!(
            Epoch::new(2025, 13, 1, 0, 0, 0.0),
            Err(TimeError::InvalidDate(_))
        ));
        assert!(matches!(
            Epoch::new(2025, 1, 1, 24, 0, 0.0),
            Err(TimeError::OutOfRange(_))
        ));
        assert!(matches!(
            Epoch::new(2025, 1, 1, 0, 0, 60.0),
            Err(TimeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_formats() {
        let expected = Epoch::new(2025, 10, 16, 12, 0, 0.0).unwrap();
        assert_eq!("2025-10-16T12:00:00".parse::<Epoch>().unwrap(), expected);
        assert_eq!("2025-10-16 12:00:00".parse::<Epoch>().unwrap(), expected);
        assert_eq!("2025-10-16T12:00:00Z".parse::<Epoch>().unwrap(), expected);
        assert_eq!(
            "2025-10-16T14:00:00+02:00".parse::<Epoch>().unwrap(),
            expected
        );

        let fractional = "2025-10-16T12:00:01.5".parse::<Epoch>().unwrap();
        assert_relative_eq!(fractional.second(), 1.5);

        assert!(matches!(
            "next tuesday".parse::<Epoch>(),
            Err(TimeError::ParseError(_))
        ));
    }

    #[test]
    fn test_from_datetime() {
        let dt = Utc.with_ymd_and_hms(2020, 7, 13, 6, 30, 15).unwrap();
        let epoch = Epoch::from(dt);
        assert_eq!(epoch, Epoch::new(2020, 7, 13, 6, 30, 15.0).unwrap());
        assert_eq!(epoch.to_string(), "2020-07-13T06:30:15.000Z");
    }

    #[test]
    fn test_minutes_since() {
        let start = Epoch::new(2020, 7, 12, 23, 0, 0.0).unwrap().julian_date();
        let end = Epoch::new(2020, 7, 13, 1, 30, 0.0).unwrap().julian_date();
        assert_relative_eq!(end.minutes_since(&start), 150.0, epsilon = 1e-9);
        assert_relative_eq!(start.minutes_since(&end), -150.0, epsilon = 1e-9);
        assert_eq!(start.minutes_since(&start), 0.0);
    }
}
