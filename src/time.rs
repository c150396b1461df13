use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

use crate::types::DayFraction;

/// Splits an instant into whole days since the most recent December 31
/// 00:00 UTC and fractional hours since the most recent UTC midnight.
/// A December 31 instant anchors to that same day, giving day 0.
pub fn day_fraction(instant: DateTime<Utc>) -> DayFraction {
    let date = instant.date_naive();
    let anchor_year = if date.month() == 12 && date.day() == 31 {
        date.year()
    } else {
        date.year() - 1
    };
    let anchor = NaiveDate::from_ymd_opt(anchor_year, 12, 31).expect("Dec 31 exists in every year");
    let days = (date - anchor).num_days();
    let hours = instant.num_seconds_from_midnight() as f64 / 3600.0
        + f64::from(instant.nanosecond()) / 3.6e12;
    DayFraction { days, hours }
}

pub fn julian_date(instant: DateTime<Utc>) -> f64 {
    let mut year = f64::from(instant.year());
    let mut month = f64::from(instant.month());
    if month < 3.0 {
        year -= 1.0;
        month += 12.0;
    }
    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let day_number = (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor()
        + f64::from(instant.day())
        + b
        - 1524.5;
    day_number + f64::from(instant.num_seconds_from_midnight()) / 86_400.0
}

/// Julian centuries since the J2000.0 epoch.
pub fn julian_centuries(julian_date: f64) -> f64 {
    (julian_date - 2_451_545.0) / 36_525.0
}
