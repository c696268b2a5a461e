// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Holiday records as returned by the Hudy service.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::date::parse_date;
use crate::errors::ValidationError;

/// Earliest year the service publishes data for
pub const MIN_YEAR: i32 = 1900;
/// Latest year the service publishes data for
pub const MAX_YEAR: i32 = 2100;

/// Kind of holiday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayType {
    /// Government designated public holiday
    Public,
    /// Organisation specific holiday registered with the account
    Custom,
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayType::Public => f.write_str("public"),
            HolidayType::Custom => f.write_str("custom"),
        }
    }
}

/// A single public or custom holiday
///
/// Records are immutable once received. `date` is kept in its canonical
/// `YYYY-MM-DD` string form because business day lookups match on that exact
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: String,
    pub name: String,
    /// Date in `YYYY-MM-DD` form
    pub date: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// English weekday name, e.g. `Monday`
    #[serde(alias = "dayOfWeek")]
    pub day_of_week: String,
    #[serde(rename = "type")]
    pub kind: HolidayType,
}

impl Holiday {
    /// Builds a holiday from a date, deriving the year, month, day and weekday
    /// fields so they always agree with `date`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date: NaiveDate,
        kind: HolidayType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date: crate::date::format_date(date),
            year: date.year(),
            month: date.month(),
            day: date.day(),
            day_of_week: date.format("%A").to_string(),
            kind,
        }
    }

    pub fn is_public(&self) -> bool {
        self.kind == HolidayType::Public
    }

    pub fn is_custom(&self) -> bool {
        self.kind == HolidayType::Custom
    }

    /// Parses `date` into a calendar date, if well formed
    pub fn naive_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Checks the record invariants
    ///
    /// `date` must be a valid Gregorian `YYYY-MM-DD` date with the year in
    /// `[1900, 2100]`, and the numeric `year`/`month`/`day` fields must agree
    /// with it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let parsed = self.naive_date().ok_or_else(|| {
            ValidationError::invalid_holiday_date(&self.date, "expected YYYY-MM-DD")
        })?;

        if !(MIN_YEAR..=MAX_YEAR).contains(&parsed.year()) {
            return Err(ValidationError::invalid_holiday_date(
                &self.date,
                format!("year must be between {MIN_YEAR} and {MAX_YEAR}"),
            ));
        }

        if (parsed.year(), parsed.month(), parsed.day()) != (self.year, self.month, self.day) {
            return Err(ValidationError::invalid_holiday_date(
                &self.date,
                format!(
                    "fields {}-{}-{} disagree with date",
                    self.year, self.month, self.day
                ),
            ));
        }

        Ok(())
    }
}
