// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the hudy client
//!
//! # Example: Using defaults
//!
//! ```rust
//! use hudy::ClientConfig;
//!
//! let config = ClientConfig::new("hd_live_example").unwrap();
//! assert!(config.cache.enabled);
//! assert!(config.retry.enabled);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use hudy::{ClientConfigBuilder, RetryConfig};
//! use std::time::Duration;
//!
//! let config = ClientConfigBuilder::new("hd_live_example")
//!     .base_url("https://staging.hudy.co.kr")
//!     .timeout(Duration::from_secs(5))
//!     .cache_ttl(Duration::from_secs(3600))
//!     .retry(RetryConfig::disabled())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.cache.ttl, Some(Duration::from_secs(3600)));
//! ```

use std::time::Duration;

use crate::errors::ValidationError;

pub mod constants;

use constants::{API_KEY_PREFIX, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Configuration for [`crate::HudyClient`]
///
/// Use [`ClientConfigBuilder`] for a fluent API; [`ClientConfigBuilder::build`]
/// validates the API key and base URL.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key, must start with `hd_live_`
    pub api_key: String,

    /// Service root
    /// Default: `https://api.hudy.co.kr`
    pub base_url: String,

    /// Per-request timeout
    /// Default: 10 seconds
    pub timeout: Duration,

    pub cache: CacheConfig,

    pub retry: RetryConfig,
}

impl ClientConfig {
    /// Validated configuration with all defaults
    pub fn new(api_key: impl Into<String>) -> Result<Self, ValidationError> {
        ClientConfigBuilder::new(api_key).build()
    }

    /// Checks the API key prefix and base URL
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.api_key.starts_with(API_KEY_PREFIX) {
            return Err(ValidationError::InvalidApiKey {
                prefix: API_KEY_PREFIX,
            });
        }
        url::Url::parse(&self.base_url).map_err(|source| ValidationError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        Ok(())
    }
}

/// Year cache settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Cache fetched years at all
    /// Default: true
    pub enabled: bool,

    /// Fixed TTL overriding the year-based tiers
    /// Default: None (past year 365d, current year 1d, future year 7d)
    pub ttl: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: None,
        }
    }
}

impl CacheConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ttl: None,
        }
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            enabled: true,
            ttl: Some(ttl),
        }
    }
}

/// Retry behaviour for failed holiday fetches
///
/// The delay before retry `n` (counting from zero) is
/// `min(initial_delay * backoff_factor^n, max_delay)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Retry at all
    /// Default: true
    pub enabled: bool,

    /// Retries after the initial attempt
    /// Default: 3
    pub max_retries: u32,

    /// Delay before the first retry
    /// Default: 1 second
    pub initial_delay: Duration,

    /// Cap on any single delay
    /// Default: 10 seconds
    pub max_delay: Duration,

    /// Growth factor between consecutive delays
    /// Default: 2.0
    pub backoff_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: constants::retry::MAX_RETRIES,
            initial_delay: constants::retry::INITIAL_DELAY,
            max_delay: constants::retry::MAX_DELAY,
            backoff_factor: constants::retry::BACKOFF_FACTOR,
        }
    }
}

impl RetryConfig {
    /// Single attempt, no retries
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Delay to wait before retry number `attempt` (zero based)
    ///
    /// # Example
    ///
    /// ```rust
    /// use hudy::RetryConfig;
    /// use std::time::Duration;
    ///
    /// let config = RetryConfig::default();
    /// assert_eq!(config.backoff_delay(0), Duration::from_secs(1));
    /// assert_eq!(config.backoff_delay(1), Duration::from_secs(2));
    /// assert_eq!(config.backoff_delay(5), Duration::from_secs(10)); // capped
    /// ```
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let factor = self.backoff_factor.max(0.0).powi(exponent);
        let scaled = self.initial_delay.as_secs_f64() * factor;

        if !scaled.is_finite() || scaled >= self.max_delay.as_secs_f64() {
            self.max_delay
        } else {
            Duration::from_secs_f64(scaled)
        }
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Starts from the defaults for `api_key`
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            config: ClientConfig {
                api_key: api_key.into(),
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout: DEFAULT_TIMEOUT,
                cache: CacheConfig::default(),
                retry: RetryConfig::default(),
            },
        }
    }

    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    #[must_use]
    pub fn cache(mut self, cache: CacheConfig) -> Self {
        self.config.cache = cache;
        self
    }

    /// Keeps the cache enabled but with a fixed TTL for every year
    #[must_use]
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.config.cache = CacheConfig::with_ttl(ttl);
        self
    }

    #[must_use]
    pub fn disable_cache(mut self) -> Self {
        self.config.cache = CacheConfig::disabled();
        self
    }

    #[must_use]
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.config.retry = retry;
        self
    }

    #[must_use]
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.retry.max_retries = max_retries;
        self
    }

    /// Validates and returns the configuration
    pub fn build(self) -> Result<ClientConfig, ValidationError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
