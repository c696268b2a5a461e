// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Holiday client combining a source, the year cache and business day math
//!
//! [`HudyClient`] fetches holidays one calendar year at a time through a
//! [`HolidaySource`], keeps them in a [`YearCache`] and answers business day
//! questions by building a [`BusinessDayCalculator`] over exactly the years a
//! question touches.
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use hudy::{ClientConfig, HudyClient};
//!
//! # async fn run() -> Result<(), hudy::HudyError> {
//! let client = HudyClient::new(ClientConfig::new("hd_live_example")?)?;
//!
//! let holidays = client.get_holidays(2024).await?;
//! println!("{} holidays in 2024", holidays.len());
//!
//! let from = NaiveDate::from_ymd_opt(2024, 9, 13).unwrap_or_default();
//! let due = client.add_business_days(from, 3).await?;
//! println!("due on {due}");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use futures::future::try_join_all;
use tokio::sync::Mutex;
use tracing::{debug, info, Instrument};

use crate::business_days::BusinessDayCalculator;
use crate::cache::{CacheStats, TtlPolicy, YearCache};
use crate::config::ClientConfig;
use crate::date::{add_days, format_date, is_weekend};
use crate::errors::{BusinessDayError, HudyError, ValidationError};
use crate::tracing::spans;
use crate::transport::{HolidaySource, HttpSource, RetryingSource};
use crate::types::holiday::{Holiday, MAX_YEAR, MIN_YEAR};

/// Calendar days scanned when looking for the next or previous business day
const NEIGHBOR_WINDOW_DAYS: i64 = 31;

/// Calendar days per business day assumed when sizing an `add_business_days` window
const BUSINESS_DAY_SPREAD: f64 = 1.4;

/// Slack added on top of the spread for long holiday runs
const WINDOW_SLACK_DAYS: i64 = 14;

/// Korean public holiday client
///
/// Generic over its [`HolidaySource`]; the default is the HTTP service with
/// retries. Use [`HudyClient::with_source`] to plug in anything else.
pub struct HudyClient<S = RetryingSource<HttpSource>> {
    source: S,
    cache: Option<Mutex<YearCache>>,
    config: ClientConfig,
}

impl HudyClient {
    /// Client for the Hudy HTTP service
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] (wrapped in [`HudyError`]) when the
    /// configuration is invalid or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, HudyError> {
        config.validate()?;
        let http = HttpSource::new(&config)?;
        let source = RetryingSource::new(http, config.retry.clone());
        Ok(Self::with_source(config, source))
    }
}

impl<S: HolidaySource> HudyClient<S> {
    /// Client over an arbitrary source, configured by `config`
    ///
    /// Only the cache settings of `config` affect this constructor; transport
    /// settings belong to `source`.
    pub fn with_source(config: ClientConfig, source: S) -> Self {
        let cache = config
            .cache
            .enabled
            .then(|| Mutex::new(YearCache::with_policy(TtlPolicy::from_override(config.cache.ttl))));

        debug!(
            source = source.name(),
            cache_enabled = cache.is_some(),
            "Creating holiday client"
        );

        Self {
            source,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// All holidays of `year`, in service order
    ///
    /// Served from the cache when fresh, otherwise fetched and cached. An
    /// empty year is cached like any other.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidYear`] outside 1900..=2100
    /// - any [`crate::ApiError`] from the source
    pub async fn get_holidays(&self, year: i32) -> Result<Vec<Holiday>, HudyError> {
        let holidays = self
            .year_holidays(year)
            .instrument(spans::get_holidays(year))
            .await?;
        Ok(holidays.to_vec())
    }

    /// Holidays with `from <= date <= to`, in year order then service order
    ///
    /// # Errors
    ///
    /// [`BusinessDayError::InvalidRange`] when `from > to`, plus everything
    /// [`HudyClient::get_holidays`] can return for each spanned year.
    pub async fn get_holidays_by_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Holiday>, HudyError> {
        if from > to {
            return Err(BusinessDayError::invalid_range(from, to).into());
        }

        async {
            let years = self.load_years(from.year(), to.year()).await?;

            let from_str = format_date(from);
            let to_str = format_date(to);
            let in_range: Vec<Holiday> = years
                .iter()
                .flat_map(|holidays| holidays.iter())
                .filter(|h| from_str.as_str() <= h.date.as_str() && h.date <= to_str)
                .cloned()
                .collect();

            debug!(count = in_range.len(), "Holidays in range");
            Ok::<_, HudyError>(in_range)
        }
        .instrument(spans::get_holidays_by_range(from, to))
        .await
    }

    /// Whether `date` is a listed holiday
    pub async fn is_holiday(&self, date: NaiveDate) -> Result<bool, HudyError> {
        let holidays = self
            .year_holidays(date.year())
            .instrument(spans::get_holidays(date.year()))
            .await?;
        let key = format_date(date);
        Ok(holidays.iter().any(|h| h.date == key))
    }

    /// Whether `date` is a weekday that is not a holiday
    ///
    /// Weekends are answered without loading any holidays, but their year must
    /// still be supported.
    pub async fn is_business_day(&self, date: NaiveDate) -> Result<bool, HudyError> {
        supported_year(date.year())?;
        if is_weekend(date) {
            return Ok(false);
        }
        Ok(!self.is_holiday(date).await?)
    }

    /// Number of business days in `[from, to]`
    pub async fn get_business_days(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<usize, HudyError> {
        if from > to {
            return Err(BusinessDayError::invalid_range(from, to).into());
        }

        async {
            let calculator = self.calculator_for(from.year(), to.year()).await?;
            Ok::<_, HudyError>(calculator.count_business_days(from, to)?)
        }
        .instrument(spans::business_days("count", from, to))
        .await
    }

    /// Every business day in `[from, to]`, chronologically
    pub async fn get_business_days_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<NaiveDate>, HudyError> {
        if from > to {
            return Err(BusinessDayError::invalid_range(from, to).into());
        }

        async {
            let calculator = self.calculator_for(from.year(), to.year()).await?;
            Ok::<_, HudyError>(calculator.get_business_days_in_range(from, to)?)
        }
        .instrument(spans::business_days("list", from, to))
        .await
    }

    /// First business day strictly after `from`
    ///
    /// Loads the holidays of every year within the next 31 days, and further
    /// years if the answer lies beyond them.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidYear`] when `from` or the answer falls
    /// outside 1900..=2100.
    pub async fn get_next_business_day(&self, from: NaiveDate) -> Result<NaiveDate, HudyError> {
        let until = add_days(from, NEIGHBOR_WINDOW_DAYS);
        self.walk_covered(from, until, |calculator| {
            calculator.get_next_business_day(from)
        })
        .instrument(spans::business_days("next", from, until))
        .await
    }

    /// Last business day strictly before `from`
    ///
    /// Loads the holidays of every year within the previous 31 days, and
    /// further years if the answer lies beyond them.
    pub async fn get_previous_business_day(
        &self,
        from: NaiveDate,
    ) -> Result<NaiveDate, HudyError> {
        let since = add_days(from, -NEIGHBOR_WINDOW_DAYS);
        self.walk_covered(from, since, |calculator| {
            calculator.get_previous_business_day(from)
        })
        .instrument(spans::business_days("previous", since, from))
        .await
    }

    /// Moves `days` business days away from `from`, backwards when negative
    ///
    /// Zero returns `from` without loading anything. Otherwise the years of
    /// an estimated window are loaded first, widened until they cover the
    /// date the walk lands on.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidYear`] when `from` or the landing date falls
    /// outside 1900..=2100.
    pub async fn add_business_days(
        &self,
        from: NaiveDate,
        days: i64,
    ) -> Result<NaiveDate, HudyError> {
        if days == 0 {
            return Ok(from);
        }

        async {
            // Every business day moved costs at least one calendar day.
            supported_year(add_days(from, days).year())?;

            let span = (days.unsigned_abs() as f64 * BUSINESS_DAY_SPREAD).ceil() as i64;
            let reach = span.saturating_add(WINDOW_SLACK_DAYS);
            let edge = add_days(from, reach.saturating_mul(days.signum()));

            self.walk_covered(from, edge, |calculator| {
                calculator.add_business_days(from, days)
            })
            .await
        }
        .instrument(spans::add_business_days(from, days))
        .await
    }

    /// Cache snapshot; all zero when caching is disabled
    pub async fn cache_stats(&self) -> CacheStats {
        match &self.cache {
            Some(cache) => cache.lock().await.stats(),
            None => CacheStats::default(),
        }
    }

    /// Drops every cached year and resets the counters
    pub async fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().await.clear();
        }
    }

    /// Drops expired years, returning how many were removed
    pub async fn prune_cache(&self) -> usize {
        match &self.cache {
            Some(cache) => cache.lock().await.prune(),
            None => 0,
        }
    }

    async fn year_holidays(&self, year: i32) -> Result<Arc<[Holiday]>, HudyError> {
        supported_year(year)?;

        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.lock().await.get(year) {
                debug!(year, count = hit.len(), "Serving holidays from cache");
                return Ok(hit);
            }
        }

        info!(year, source = self.source.name(), "Fetching holidays");
        let holidays: Arc<[Holiday]> = self.source.fetch_year(year).await?.into();
        info!(year, count = holidays.len(), "Fetched holidays");

        if let Some(cache) = &self.cache {
            cache.lock().await.set(year, Arc::clone(&holidays));
        }

        Ok(holidays)
    }

    /// Holidays of each year in `first..=last`, concurrently
    async fn load_years(&self, first: i32, last: i32) -> Result<Vec<Arc<[Holiday]>>, HudyError> {
        try_join_all((first..=last).map(|year| self.year_holidays(year))).await
    }

    async fn calculator_for(
        &self,
        first: i32,
        last: i32,
    ) -> Result<BusinessDayCalculator, HudyError> {
        let years = self.load_years(first, last).await?;
        Ok(BusinessDayCalculator::new(
            years.iter().flat_map(|holidays| holidays.iter()),
        ))
    }

    /// Runs `walk` over the holidays of every year it crosses
    ///
    /// Starts with the years between `from` and `edge` (the edge clamped to
    /// the supported years). When the walk lands in a year that was not
    /// loaded, the missing years are loaded and the walk runs again, so a
    /// holiday is never mistaken for a business day. Years between `from` and
    /// the landing date are always loaded, since the loaded span is contiguous.
    async fn walk_covered<F>(
        &self,
        from: NaiveDate,
        edge: NaiveDate,
        walk: F,
    ) -> Result<NaiveDate, HudyError>
    where
        F: Fn(&BusinessDayCalculator) -> NaiveDate,
    {
        let anchor = supported_year(from.year())?;
        let far = edge.year().clamp(MIN_YEAR, MAX_YEAR);
        let (mut first, mut last) = (anchor.min(far), anchor.max(far));
        let mut loaded = self.load_years(first, last).await?;

        loop {
            let calculator =
                BusinessDayCalculator::new(loaded.iter().flat_map(|holidays| holidays.iter()));
            let landed = walk(&calculator);
            let year = landed.year();

            if (first..=last).contains(&year) {
                return Ok(landed);
            }
            supported_year(year)?;

            debug!(year, first, last, "Walk left the loaded years, widening");
            if year < first {
                loaded.extend(self.load_years(year, first - 1).await?);
                first = year;
            } else {
                loaded.extend(self.load_years(last + 1, year).await?);
                last = year;
            }
        }
    }
}

fn supported_year(year: i32) -> Result<i32, HudyError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(ValidationError::invalid_year(year).into())
    }
}

impl<S> std::fmt::Debug for HudyClient<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HudyClient")
            .field("base_url", &self.config.base_url)
            .field("cache_enabled", &self.cache.is_some())
            .finish_non_exhaustive()
    }
}
