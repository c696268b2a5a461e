// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Time-to-live policy for cached holiday years.
//!
//! Holiday calendars firm up over time. Past years never change, the current
//! year can still gain substitute holidays, and future years are provisional
//! until the issuing authority finalizes them.

use std::cmp::Ordering;
use std::time::Duration;

const DAY: u64 = 24 * 60 * 60;

/// TTL for years before the current one
pub const PAST_YEAR_TTL: Duration = Duration::from_secs(365 * DAY);
/// TTL for the current year
pub const CURRENT_YEAR_TTL: Duration = Duration::from_secs(DAY);
/// TTL for years after the current one
pub const FUTURE_YEAR_TTL: Duration = Duration::from_secs(7 * DAY);

/// How long a cached year stays fresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TtlPolicy {
    /// Tiered by the year's distance from the current calendar year
    #[default]
    YearBased,
    /// The same TTL for every year, regardless of how old it is
    Fixed(Duration),
}

impl TtlPolicy {
    /// Builds a policy from an optional override, as found in
    /// [`crate::CacheConfig::ttl`].
    pub fn from_override(ttl: Option<Duration>) -> Self {
        ttl.map_or(TtlPolicy::YearBased, TtlPolicy::Fixed)
    }

    /// TTL for `year` when the calendar currently reads `current_year`
    ///
    /// # Examples
    ///
    /// ```
    /// use hudy::cache::{TtlPolicy, CURRENT_YEAR_TTL, FUTURE_YEAR_TTL, PAST_YEAR_TTL};
    ///
    /// let policy = TtlPolicy::YearBased;
    /// assert_eq!(policy.ttl_for(2020, 2024), PAST_YEAR_TTL);
    /// assert_eq!(policy.ttl_for(2024, 2024), CURRENT_YEAR_TTL);
    /// assert_eq!(policy.ttl_for(2025, 2024), FUTURE_YEAR_TTL);
    /// ```
    pub fn ttl_for(&self, year: i32, current_year: i32) -> Duration {
        match self {
            TtlPolicy::Fixed(ttl) => *ttl,
            TtlPolicy::YearBased => match year.cmp(&current_year) {
                Ordering::Less => PAST_YEAR_TTL,
                Ordering::Equal => CURRENT_YEAR_TTL,
                Ordering::Greater => FUTURE_YEAR_TTL,
            },
        }
    }
}
