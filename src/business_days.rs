// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Holiday-aware business day arithmetic
//!
//! A business day is any Monday to Friday whose `YYYY-MM-DD` form is not in the
//! holiday set. All stepping is a day-by-day linear scan: holidays derived
//! from the lunar calendar and ad hoc substitute holidays follow no rule a
//! closed-form formula could use.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use hudy::{BusinessDayCalculator, Holiday, HolidayType};
//!
//! let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let holidays = vec![Holiday::new("h1", "신정", new_year, HolidayType::Public)];
//! let calculator = BusinessDayCalculator::new(&holidays);
//!
//! let friday = NaiveDate::from_ymd_opt(2023, 12, 29).unwrap();
//! let next = calculator.get_next_business_day(friday);
//! assert_eq!(next, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
//! ```

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::date::{add_days, format_date, is_weekend};
use crate::errors::BusinessDayError;
use crate::types::holiday::Holiday;

/// Business day calculator over a fixed holiday set
///
/// Membership is decided by exact string equality against each holiday's
/// `date` field, so a record whose date is not in canonical `YYYY-MM-DD` form
/// never matches. The calculator is immutable after construction and can be
/// shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct BusinessDayCalculator {
    holiday_dates: HashSet<String>,
}

impl BusinessDayCalculator {
    /// Builds a calculator from holiday records
    pub fn new<'a>(holidays: impl IntoIterator<Item = &'a Holiday>) -> Self {
        Self {
            holiday_dates: holidays.into_iter().map(|h| h.date.clone()).collect(),
        }
    }

    /// Builds a calculator from raw `YYYY-MM-DD` strings
    pub fn from_dates<S: Into<String>>(dates: impl IntoIterator<Item = S>) -> Self {
        Self {
            holiday_dates: dates.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of distinct holiday dates known to the calculator
    pub fn holiday_count(&self) -> usize {
        self.holiday_dates.len()
    }

    /// Whether `date` is a listed holiday, regardless of weekday
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_dates.contains(&format_date(date))
    }

    /// Neither a weekend nor a listed holiday
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.is_holiday(date)
    }

    /// Counts business days in `[from, to]`, both ends included
    ///
    /// # Errors
    ///
    /// [`BusinessDayError::InvalidRange`] when `from > to`.
    pub fn count_business_days(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<usize, BusinessDayError> {
        if from > to {
            return Err(BusinessDayError::invalid_range(from, to));
        }
        Ok(from
            .iter_days()
            .take_while(|d| *d <= to)
            .filter(|d| self.is_business_day(*d))
            .count())
    }

    /// First business day strictly after `from`
    ///
    /// `from` itself is never returned, even when it is a business day.
    pub fn get_next_business_day(&self, from: NaiveDate) -> NaiveDate {
        self.step_until_business_day(from, 1)
    }

    /// Last business day strictly before `from`
    pub fn get_previous_business_day(&self, from: NaiveDate) -> NaiveDate {
        self.step_until_business_day(from, -1)
    }

    /// Moves `days` business days away from `from`
    ///
    /// Zero returns `from` unchanged whatever it is. Otherwise the walk moves
    /// one calendar day at a time in the direction of `days`, counting only
    /// the days it lands on that are business days.
    ///
    /// Starting on a business day, `add_business_days(add_business_days(d, n), -n)`
    /// returns `d`. Starting on a weekend or holiday the round trip lands on
    /// the nearest business day instead, so the symmetry is not exact.
    ///
    /// A walk that reaches [`NaiveDate::MAX`] or [`NaiveDate::MIN`] stops there
    /// and returns the bound, as do the next and previous business day walks.
    pub fn add_business_days(&self, from: NaiveDate, days: i64) -> NaiveDate {
        if days == 0 {
            return from;
        }

        let direction = days.signum();
        let target = days.unsigned_abs();
        let mut current = from;
        let mut counted = 0u64;

        while counted < target {
            let next = add_days(current, direction);
            if next == current {
                break;
            }
            current = next;
            if self.is_business_day(current) {
                counted += 1;
            }
        }

        current
    }

    /// Every business day in `[from, to]`, in chronological order
    ///
    /// # Errors
    ///
    /// [`BusinessDayError::InvalidRange`] when `from > to`.
    pub fn get_business_days_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<NaiveDate>, BusinessDayError> {
        if from > to {
            return Err(BusinessDayError::invalid_range(from, to));
        }
        Ok(from
            .iter_days()
            .take_while(|d| *d <= to)
            .filter(|d| self.is_business_day(*d))
            .collect())
    }

    /// Walks from `from` until a business day; stops at the chrono date bounds
    fn step_until_business_day(&self, from: NaiveDate, direction: i64) -> NaiveDate {
        let mut current = add_days(from, direction);
        while !self.is_business_day(current) {
            let next = add_days(current, direction);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }
}
