// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for hudy integration tests
//!
//! Provides an in-memory [`HolidaySource`] and Korean holiday fixtures so the
//! client can be exercised without the network.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use hudy::transport::HolidaySource;
use hudy::{ApiError, ClientConfig, ClientConfigBuilder, Holiday, HolidayType, RetryConfig};

pub const TEST_API_KEY: &str = "hd_live_test123";

/// Mock HolidaySource for testing client logic
///
/// Serves configured years, answers unknown years with an empty list, and
/// fails with queued errors (oldest first) before serving anything.
///
/// # Example
///
/// ```rust,ignore
/// let mock = MockHolidaySource::new()
///     .with_year(2024, korea_2024())
///     .with_errors([ApiError::from_status(503, "unavailable")]);
///
/// let client = HudyClient::with_source(test_config(), mock);
/// ```
#[derive(Default)]
pub struct MockHolidaySource {
    years: HashMap<i32, Vec<Holiday>>,
    errors: Mutex<VecDeque<ApiError>>,
    fetches: AtomicUsize,
    fetched_years: Mutex<Vec<i32>>,
}

impl MockHolidaySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holidays returned for `year`
    pub fn with_year(mut self, year: i32, holidays: Vec<Holiday>) -> Self {
        self.years.insert(year, holidays);
        self
    }

    /// Errors returned by the next fetches, one per fetch
    pub fn with_errors(self, errors: impl IntoIterator<Item = ApiError>) -> Self {
        self.errors.lock().unwrap().extend(errors);
        self
    }

    /// Total number of fetch calls, failed ones included
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Years requested so far, in call order
    pub fn fetched_years(&self) -> Vec<i32> {
        self.fetched_years.lock().unwrap().clone()
    }
}

#[async_trait]
impl HolidaySource for MockHolidaySource {
    async fn fetch_year(&self, year: i32) -> Result<Vec<Holiday>, ApiError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.fetched_years.lock().unwrap().push(year);

        if let Some(error) = self.errors.lock().unwrap().pop_front() {
            return Err(error);
        }

        Ok(self.years.get(&year).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn public(date: NaiveDate, name: &str) -> Holiday {
    Holiday::new(
        format!("hol_{}", date.format("%Y_%m%d")),
        name,
        date,
        HolidayType::Public,
    )
}

/// Korean public holidays of 2024, as served by the API
pub fn korea_2024() -> Vec<Holiday> {
    [
        ((1, 1), "신정"),
        ((2, 9), "설날 연휴"),
        ((2, 10), "설날"),
        ((2, 11), "설날 연휴"),
        ((3, 1), "삼일절"),
        ((4, 10), "제22대 국회의원 선거일"),
        ((5, 5), "어린이날"),
        ((5, 6), "어린이날 대체공휴일"),
        ((5, 15), "석가탄신일"),
        ((6, 6), "현충일"),
        ((8, 15), "광복절"),
        ((9, 16), "추석 연휴"),
        ((9, 17), "추석"),
        ((9, 18), "추석 연휴"),
        ((10, 3), "개천절"),
        ((10, 9), "한글날"),
        ((12, 25), "크리스마스"),
    ]
    .into_iter()
    .map(|((month, day), name)| public(ymd(2024, month, day), name))
    .collect()
}

/// Early 2025 holidays, enough for year boundary tests
pub fn korea_2025_q1() -> Vec<Holiday> {
    [
        ((1, 1), "신정"),
        ((1, 28), "설날 연휴"),
        ((1, 29), "설날"),
        ((1, 30), "설날 연휴"),
        ((3, 1), "삼일절"),
        ((3, 3), "삼일절 대체공휴일"),
    ]
    .into_iter()
    .map(|((month, day), name)| public(ymd(2025, month, day), name))
    .collect()
}

/// Mock serving 2024 and early 2025
pub fn korea_source() -> MockHolidaySource {
    MockHolidaySource::new()
        .with_year(2024, korea_2024())
        .with_year(2025, korea_2025_q1())
}

/// Valid configuration with default cache settings
pub fn test_config() -> ClientConfig {
    ClientConfig::new(TEST_API_KEY).unwrap()
}

/// Retry settings with millisecond delays
pub fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries,
        initial_delay: std::time::Duration::from_millis(5),
        max_delay: std::time::Duration::from_millis(20),
        ..RetryConfig::default()
    }
}

pub fn config_builder() -> ClientConfigBuilder {
    ClientConfigBuilder::new(TEST_API_KEY)
}
