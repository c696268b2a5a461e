// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for business day calculations.

use chrono::NaiveDate;

/// Errors raised by [`crate::BusinessDayCalculator`] range operations.
///
/// Ranges are never clamped or swapped: a reversed range is always reported
/// back to the caller.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hudy::{BusinessDayCalculator, BusinessDayError};
///
/// let calculator = BusinessDayCalculator::new(&[]);
/// let from = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
///
/// match calculator.count_business_days(from, to) {
///     Err(BusinessDayError::InvalidRange { .. }) => {}
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BusinessDayError {
    /// The start of the range lies after its end.
    #[error("Invalid range: from {from} is after to {to}")]
    InvalidRange {
        /// Requested range start
        from: NaiveDate,
        /// Requested range end
        to: NaiveDate,
    },
}

impl BusinessDayError {
    pub fn invalid_range(from: NaiveDate, to: NaiveDate) -> Self {
        BusinessDayError::InvalidRange { from, to }
    }
}
