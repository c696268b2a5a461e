// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Where holidays come from.
//!
//! The client only depends on [`HolidaySource`]: one asynchronous fetch of a
//! full calendar year. [`HttpSource`] talks to the Hudy service and
//! [`RetryingSource`] adds exponential backoff on top of any source.
//!
//! ```rust,no_run
//! use hudy::transport::{HolidaySource, HttpSource, RetryingSource};
//! use hudy::ClientConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new("hd_live_example")?;
//! let source = RetryingSource::new(HttpSource::new(&config)?, config.retry.clone());
//! let holidays = source.fetch_year(2024).await?;
//! println!("{} holidays", holidays.len());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::types::holiday::Holiday;

mod http;
mod response;
mod retry;

pub use http::HttpSource;
pub use response::ApiResponse;
pub use retry::RetryingSource;

/// Fetches all holidays of one year.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch_year(&self, year: i32) -> Result<Vec<Holiday>, ApiError>;

    /// Short label for logs
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<S: HolidaySource + ?Sized> HolidaySource for Arc<S> {
    async fn fetch_year(&self, year: i32) -> Result<Vec<Holiday>, ApiError> {
        (**self).fetch_year(year).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[async_trait]
impl<S: HolidaySource + ?Sized> HolidaySource for Box<S> {
    async fn fetch_year(&self, year: i32) -> Result<Vec<Holiday>, ApiError> {
        (**self).fetch_year(year).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
