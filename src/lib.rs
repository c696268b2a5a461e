// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the Hudy Korean public holiday API.
//!
//! Holidays are fetched per calendar year, cached with year-aware expiry, and
//! used for business day arithmetic (weekdays that are not holidays).
//!
//! ```rust,no_run
//! use hudy::{ClientConfig, HudyClient};
//!
//! # async fn run() -> Result<(), hudy::HudyError> {
//! let client = HudyClient::new(ClientConfig::new("hd_live_example")?)?;
//! for holiday in client.get_holidays(2024).await? {
//!     println!("{} {}", holiday.date, holiday.name);
//! }
//! # Ok(())
//! # }
//! ```

mod business_days;
pub mod cache;
mod client;
mod config;
mod date;
mod errors;
mod tracing;
pub mod transport;
mod types;

pub use business_days::BusinessDayCalculator;
pub use cache::{CacheEntryInfo, CacheStats, TtlPolicy, YearCache};
pub use client::HudyClient;
pub use config::constants;
pub use config::{CacheConfig, ClientConfig, ClientConfigBuilder, RetryConfig};
pub use date::{add_days, days_between, format_date, is_same_day, is_weekend, parse_date};
pub use errors::{ApiError, BusinessDayError, ErrorCode, HudyError, ValidationError};
pub use types::holiday::{Holiday, HolidayType, MAX_YEAR, MIN_YEAR};
