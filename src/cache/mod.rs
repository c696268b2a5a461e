// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Year-keyed holiday cache with calendar-aware expiration
//!
//! [`YearCache`] stores one list of holidays per calendar year. Each entry
//! expires according to a [`TtlPolicy`]: past years are kept for a year,
//! the current year for a day and future years for a week. An explicit TTL
//! override replaces the tiers entirely.
//!
//! Expired entries are removed lazily when read, or eagerly by
//! [`YearCache::prune`].
//!
//! # Examples
//!
//! ```
//! use hudy::cache::YearCache;
//!
//! let mut cache = YearCache::new();
//! assert!(cache.get(2020).is_none());
//!
//! cache.set(2020, Vec::new());
//! assert!(cache.get(2020).is_some());
//!
//! let stats = cache.stats();
//! assert_eq!((stats.hits, stats.misses, stats.size), (1, 1, 1));
//! ```
//!
//! # Thread safety
//!
//! The cache has no interior locking. [`crate::HudyClient`] guards it with a
//! single mutex. Two concurrent misses for the same year both fetch and both
//! `set`; the last write wins.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::date::format_date;
use crate::types::holiday::Holiday;

mod ttl;
pub mod types;

pub use ttl::{TtlPolicy, CURRENT_YEAR_TTL, FUTURE_YEAR_TTL, PAST_YEAR_TTL};
pub use types::{CacheEntryInfo, CacheKey, CacheStats};

/// Holidays for one year and when they stop being fresh
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Arc<[Holiday]>,
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Read side check: stale once `now` is strictly past the expiry
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// In-memory, year-keyed holiday cache
///
/// Lookups hand back the stored `Arc<[Holiday]>`, so a hit returns the very
/// sequence that was stored and callers can never mutate cached data.
///
/// Every operation has an `*_at` variant taking an explicit `now`, which the
/// plain variant calls with [`Utc::now`].
#[derive(Debug, Default)]
pub struct YearCache {
    entries: BTreeMap<CacheKey, CacheEntry>,
    policy: TtlPolicy,
    hits: u64,
    misses: u64,
}

impl YearCache {
    /// Creates an empty cache with year-based TTLs
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache that uses `ttl` for every year
    pub fn with_ttl(ttl: Duration) -> Self {
        Self::with_policy(TtlPolicy::Fixed(ttl))
    }

    pub fn with_policy(policy: TtlPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> TtlPolicy {
        self.policy
    }

    /// Looks up the holidays cached for `year`
    ///
    /// Returns `None` and counts a miss when the year is absent or its entry
    /// has expired; an expired entry is removed. Otherwise counts a hit.
    pub fn get(&mut self, year: i32) -> Option<Arc<[Holiday]>> {
        self.get_at(year, Utc::now())
    }

    pub fn get_at(&mut self, year: i32, now: DateTime<Utc>) -> Option<Arc<[Holiday]>> {
        let key = CacheKey::new(year);

        let Some(entry) = self.entries.get(&key) else {
            self.misses += 1;
            debug!(key = %key, "Cache miss");
            return None;
        };

        if entry.is_expired(now) {
            debug!(key = %key, expires_at = %entry.expires_at, "Cache entry expired");
            self.entries.remove(&key);
            self.misses += 1;
            return None;
        }

        self.hits += 1;
        debug!(key = %key, "Cache hit");
        Some(Arc::clone(&entry.data))
    }

    /// Stores the holidays for `year`, replacing any previous entry
    ///
    /// The entry expires after the TTL the policy assigns to `year`.
    pub fn set(&mut self, year: i32, holidays: impl Into<Arc<[Holiday]>>) {
        self.set_at(year, holidays, Utc::now());
    }

    pub fn set_at(&mut self, year: i32, holidays: impl Into<Arc<[Holiday]>>, now: DateTime<Utc>) {
        let key = CacheKey::new(year);
        let ttl = self.policy.ttl_for(year, now.year());
        let expires_at = expiry(now, ttl);
        let data = holidays.into();

        debug!(
            key = %key,
            holidays = data.len(),
            ttl_secs = ttl.as_secs(),
            expires_at = %expires_at,
            "Caching holidays"
        );
        self.entries.insert(key, CacheEntry { data, expires_at });
    }

    /// Holidays in `[from, to]` when every spanned year is cached and fresh
    ///
    /// Each spanned year is looked up with [`YearCache::get`], so the hit and
    /// miss counters reflect exactly those lookups and nothing more. The scan
    /// stops at the first missing year. Filtering compares `YYYY-MM-DD`
    /// strings, which orders the same as the dates themselves. A reversed
    /// range returns `None` without touching the counters.
    pub fn get_range(&mut self, from: NaiveDate, to: NaiveDate) -> Option<Vec<Holiday>> {
        self.get_range_at(from, to, Utc::now())
    }

    pub fn get_range_at(
        &mut self,
        from: NaiveDate,
        to: NaiveDate,
        now: DateTime<Utc>,
    ) -> Option<Vec<Holiday>> {
        if from > to {
            return None;
        }

        let from_str = format_date(from);
        let to_str = format_date(to);

        let mut in_range = Vec::new();
        for year in from.year()..=to.year() {
            let cached = self.get_at(year, now)?;
            in_range.extend(
                cached
                    .iter()
                    .filter(|h| from_str.as_str() <= h.date.as_str() && h.date <= to_str)
                    .cloned(),
            );
        }

        Some(in_range)
    }

    /// Removes every entry and resets the hit and miss counters
    pub fn clear(&mut self) {
        debug!(entries = self.entries.len(), "Clearing year cache");
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Eagerly removes expired entries, returning how many were removed
    ///
    /// An entry whose expiry equals `now` counts as expired here. Counters are
    /// left untouched.
    pub fn prune(&mut self) -> usize {
        self.prune_at(Utc::now())
    }

    pub fn prune_at(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        let removed = before - self.entries.len();

        if removed > 0 {
            debug!(removed, remaining = self.entries.len(), "Pruned expired cache entries");
        }
        removed
    }

    /// Snapshot of counters and live entries
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
            entries: self
                .entries
                .iter()
                .map(|(key, entry)| CacheEntryInfo {
                    key: key.to_string(),
                    expires_at: entry.expires_at,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `now + ttl`, saturating at the latest representable instant
fn expiry(now: DateTime<Utc>, ttl: Duration) -> DateTime<Utc> {
    TimeDelta::from_std(ttl)
        .ok()
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
