// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Service endpoints and client defaults
//!
//! Centralizes the magic values used by configuration and transport.

use std::time::Duration;

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.hudy.co.kr";

/// Path of the per-year holiday listing, relative to the base URL
pub const HOLIDAYS_PATH: &str = "/v1/holidays";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Every live API key starts with this prefix
pub const API_KEY_PREFIX: &str = "hd_live_";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Retry defaults
pub mod retry {
    use std::time::Duration;

    /// Retries after the initial attempt
    pub const MAX_RETRIES: u32 = 3;
    /// Delay before the first retry
    pub const INITIAL_DELAY: Duration = Duration::from_secs(1);
    /// Upper bound for any single delay
    pub const MAX_DELAY: Duration = Duration::from_secs(10);
    /// Multiplier applied to the delay after each failed attempt
    pub const BACKOFF_FACTOR: f64 = 2.0;
}

/// Longest error body excerpt carried into an error message
pub const ERROR_BODY_EXCERPT: usize = 200;
