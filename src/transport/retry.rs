// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Retry wrapper with exponential backoff for holiday sources.
//!
//! [`RetryingSource`] wraps any [`HolidaySource`] and re-issues a failed
//! `fetch_year` while the error is marked retryable. Before retry `n` (zero
//! based) it sleeps for [`RetryConfig::backoff_delay`]:
//!
//! ```text
//! delay = min(initial_delay * backoff_factor^n, max_delay)
//! ```
//!
//! At most `max_retries + 1` attempts are made. Non-retryable errors are
//! returned immediately.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::RetryConfig;
use crate::errors::ApiError;
use crate::transport::HolidaySource;
use crate::types::holiday::Holiday;

/// A [`HolidaySource`] that retries transient failures of its inner source.
#[derive(Debug, Clone)]
pub struct RetryingSource<S> {
    inner: S,
    config: RetryConfig,
}

impl<S> RetryingSource<S> {
    pub fn new(inner: S, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn max_retries(&self) -> u32 {
        if self.config.enabled {
            self.config.max_retries
        } else {
            0
        }
    }
}

#[async_trait]
impl<S: HolidaySource> HolidaySource for RetryingSource<S> {
    async fn fetch_year(&self, year: i32) -> Result<Vec<Holiday>, ApiError> {
        let max_retries = self.max_retries();
        let mut attempt = 0u32;

        loop {
            match self.inner.fetch_year(year).await {
                Ok(holidays) => {
                    if attempt > 0 {
                        debug!(year, attempt, "Fetch succeeded after retry");
                    }
                    return Ok(holidays);
                }
                Err(error) => {
                    if !error.retryable {
                        debug!(year, error = %error, "Non-retryable error, not retrying");
                        return Err(error);
                    }

                    if attempt >= max_retries {
                        if max_retries > 0 {
                            warn!(
                                year,
                                error = %error,
                                attempts = attempt + 1,
                                "Max retries exceeded"
                            );
                        }
                        return Err(error);
                    }

                    let delay = self.config.backoff_delay(attempt);
                    warn!(
                        year,
                        error = %error,
                        attempt = attempt + 1,
                        max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "Retryable error, backing off"
                    );

                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
