// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar date helpers shared by the cache, the calculator and the client.
//!
//! Holiday records carry their date as a canonical `YYYY-MM-DD` string, so most
//! helpers here convert between that form and [`NaiveDate`].

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

/// Canonical wire format for holiday dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hudy::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(format_date(date), "2024-01-01");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a strict `YYYY-MM-DD` string.
///
/// Returns `None` for anything that is not a real Gregorian date in that exact
/// shape (`2024-2-9` and `2024-02-30` are both rejected).
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Saturday or Sunday, independent of locale.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Shifts a date by a signed number of calendar days.
///
/// Saturates at the chrono date bounds instead of panicking.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days >= 0 {
            NaiveDate::MAX
        } else {
            NaiveDate::MIN
        })
}

pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

/// Number of calendar days between two dates, counting both ends.
///
/// `days_between(d, d) == 1`. A reversed range yields zero or a negative count.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days() + 1
}
