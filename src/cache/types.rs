// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Keys and statistics for the year cache

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key for one cached calendar year, rendered as `year:<Y>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CacheKey(i32);

impl CacheKey {
    pub fn new(year: i32) -> Self {
        Self(year)
    }

    pub fn year(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "year:{}", self.0)
    }
}

/// Introspection record for one live cache entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntryInfo {
    /// Rendered [`CacheKey`], e.g. `year:2024`
    pub key: String,
    /// Absolute expiry, serialized as Unix epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,
}

/// Snapshot of cache performance and contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of lookups served from the cache
    pub hits: u64,
    /// Number of lookups that found nothing usable (absent or expired)
    pub misses: u64,
    /// Current number of entries
    pub size: usize,
    /// Every live entry at snapshot time, in year order
    pub entries: Vec<CacheEntryInfo>,
}

impl CacheStats {
    /// Calculates the cache hit rate as a percentage (0.0 to 100.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={}, misses={}, size={}, hit_rate={:.1}%",
            self.hits,
            self.misses,
            self.size,
            self.hit_rate()
        )
    }
}
