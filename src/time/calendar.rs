//! Calendar date and Julian date conversion functions
//!
//! All conversions use the proleptic Gregorian calendar, which is what TLE
//! epochs and catalog timestamps are expressed in.

use crate::constants::DAY_S;

/// Convert (year, month, day) to the Julian day number of that date's noon
pub fn compute_julian_day(year: i32, month: u32, day: u32) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let janfeb = month < 3;

    1461 * (year + 4800 - if janfeb { 1 } else { 0 }) / 4
        + 367 * (month - 2 + if janfeb { 12 } else { 0 }) / 12
        - 3 * ((year + 4900 - if janfeb { 1 } else { 0 }) / 100) / 4
        - 32075
        + day
}

/// Julian date of the midnight that starts the given calendar day
pub fn midnight_julian_date(year: i32, month: u32, day: u32) -> f64 {
    compute_julian_day(year, month, day) as f64 - 0.5
}

/// Fraction of a day elapsed at the given wall-clock time
pub fn day_fraction(hour: u32, minute: u32, second: f64) -> f64 {
    (second + minute as f64 * 60.0 + hour as f64 * 3600.0) / DAY_S
}
