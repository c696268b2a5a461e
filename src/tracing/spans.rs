// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for client operations.
//!
//! Each instrumented operation has a helper here instead of an
//! `#[instrument]` attribute, so span names and fields live in one place.
//! Async callers attach the span with `Instrument::instrument`:
//!
//! ```rust,ignore
//! async move { /* operation */ }
//!     .instrument(spans::get_holidays(year))
//!     .await
//! ```

use chrono::NaiveDate;
use tracing::Span;

/// Span for a single year lookup.
///
/// Parent: None, or a range/business day span
/// Children: fetch_year when the cache misses
#[inline]
pub(crate) fn get_holidays(year: i32) -> Span {
    tracing::info_span!("hudy.get_holidays", year = year)
}

/// Span for a date range lookup spanning one or more years.
///
/// Children: get_holidays per uncached year
#[inline]
pub(crate) fn get_holidays_by_range(from: NaiveDate, to: NaiveDate) -> Span {
    tracing::info_span!(
        "hudy.get_holidays_by_range",
        from = %from,
        to = %to,
    )
}

/// Span for a business day query over an explicit window.
#[inline]
pub(crate) fn business_days(operation: &'static str, from: NaiveDate, to: NaiveDate) -> Span {
    tracing::debug_span!(
        "hudy.business_days",
        operation = operation,
        from = %from,
        to = %to,
    )
}

/// Span for moving `days` business days away from `from`.
#[inline]
pub(crate) fn add_business_days(from: NaiveDate, days: i64) -> Span {
    tracing::debug_span!("hudy.add_business_days", from = %from, days = days)
}

/// Span around one network fetch of a year.
///
/// Parent: get_holidays
#[inline]
pub(crate) fn fetch_year(source: &'static str, year: i32) -> Span {
    tracing::debug_span!("hudy.fetch_year", source = source, year = year)
}
