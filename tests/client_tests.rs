// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for HudyClient against an in-memory holiday source
//!
//! Covers caching, range queries across year boundaries, business day
//! arithmetic and error propagation from the source.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Utc};
use helpers::{
    config_builder, fast_retry, korea_2024, korea_source, test_config, ymd, MockHolidaySource,
};
use hudy::transport::RetryingSource;
use hudy::{
    ApiError, BusinessDayError, ErrorCode, Holiday, HolidayType, HudyClient, HudyError,
    ValidationError,
};

fn korea_client() -> HudyClient<MockHolidaySource> {
    HudyClient::with_source(test_config(), korea_source())
}

#[tokio::test]
async fn test_get_holidays_returns_service_order() {
    let client = korea_client();

    let holidays = client.get_holidays(2024).await.unwrap();

    assert_eq!(holidays, korea_2024());
    assert_eq!(holidays[0].name, "신정");
    assert_eq!(holidays[0].day_of_week, "Monday");
}

#[tokio::test]
async fn test_get_holidays_caches_per_year() {
    let client = korea_client();

    client.get_holidays(2024).await.unwrap();
    client.get_holidays(2024).await.unwrap();
    client.get_holidays(2025).await.unwrap();

    assert_eq!(client.source().fetched_years(), vec![2024, 2025]);

    let stats = client.cache_stats().await;
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.size, 2);
    let keys: Vec<_> = stats.entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["year:2024", "year:2025"]);
}

#[tokio::test]
async fn test_empty_year_is_cached() {
    let client = korea_client();

    assert!(client.get_holidays(1999).await.unwrap().is_empty());
    assert!(client.get_holidays(1999).await.unwrap().is_empty());

    assert_eq!(client.source().fetch_count(), 1);
    assert_eq!(client.cache_stats().await.hits, 1);
}

#[tokio::test]
async fn test_invalid_year_is_rejected_before_fetch() {
    let client = korea_client();

    for year in [1899, 2101, -1] {
        let err = client.get_holidays(year).await.unwrap_err();
        assert!(
            matches!(err, HudyError::Validation(ValidationError::InvalidYear { year: y }) if y == year),
            "year {year}: {err}"
        );
    }

    assert_eq!(client.source().fetch_count(), 0);
}

#[tokio::test]
async fn test_holidays_by_range_within_year() {
    let client = korea_client();

    let holidays = client
        .get_holidays_by_range(ymd(2024, 2, 1), ymd(2024, 2, 29))
        .await
        .unwrap();

    let dates: Vec<_> = holidays.iter().map(|h| h.date.as_str()).collect();
    assert_eq!(dates, ["2024-02-09", "2024-02-10", "2024-02-11"]);
}

#[tokio::test]
async fn test_holidays_by_range_bounds_are_inclusive() {
    let client = korea_client();

    let holidays = client
        .get_holidays_by_range(ymd(2024, 9, 16), ymd(2024, 9, 16))
        .await
        .unwrap();

    assert_eq!(holidays.len(), 1);
    assert_eq!(holidays[0].name, "추석 연휴");
}

#[tokio::test]
async fn test_holidays_by_range_across_years() {
    let client = korea_client();

    let holidays = client
        .get_holidays_by_range(ymd(2024, 12, 20), ymd(2025, 1, 31))
        .await
        .unwrap();

    let dates: Vec<_> = holidays.iter().map(|h| h.date.as_str()).collect();
    assert_eq!(
        dates,
        ["2024-12-25", "2025-01-01", "2025-01-28", "2025-01-29", "2025-01-30"]
    );

    let mut years = client.source().fetched_years();
    years.sort_unstable();
    assert_eq!(years, vec![2024, 2025]);
}

#[tokio::test]
async fn test_reversed_range_is_rejected() {
    let client = korea_client();
    let (from, to) = (ymd(2024, 3, 1), ymd(2024, 2, 1));

    let err = client.get_holidays_by_range(from, to).await.unwrap_err();
    assert!(matches!(
        err,
        HudyError::BusinessDay(BusinessDayError::InvalidRange { .. })
    ));

    assert!(client.get_business_days(from, to).await.is_err());
    assert!(client.get_business_days_in_range(from, to).await.is_err());
    assert_eq!(client.source().fetch_count(), 0);
}

#[tokio::test]
async fn test_is_holiday_and_business_day() {
    let client = korea_client();

    assert!(client.is_holiday(ymd(2024, 9, 17)).await.unwrap());
    assert!(!client.is_business_day(ymd(2024, 9, 17)).await.unwrap());

    // Weekend holiday
    assert!(client.is_holiday(ymd(2024, 2, 10)).await.unwrap());

    assert!(!client.is_holiday(ymd(2024, 9, 19)).await.unwrap());
    assert!(client.is_business_day(ymd(2024, 9, 19)).await.unwrap());

    // Plain Saturday
    assert!(!client.is_business_day(ymd(2024, 9, 21)).await.unwrap());
}

#[tokio::test]
async fn test_business_day_count() {
    let client = korea_client();

    let february = client
        .get_business_days(ymd(2024, 2, 1), ymd(2024, 2, 29))
        .await
        .unwrap();
    assert_eq!(february, 20);

    let year = client
        .get_business_days(ymd(2024, 1, 1), ymd(2024, 12, 31))
        .await
        .unwrap();
    assert_eq!(year, 248);

    // Single holiday
    let none = client
        .get_business_days(ymd(2024, 12, 25), ymd(2024, 12, 25))
        .await
        .unwrap();
    assert_eq!(none, 0);
}

#[tokio::test]
async fn test_business_days_in_range_skips_chuseok() {
    let client = korea_client();

    let days = client
        .get_business_days_in_range(ymd(2024, 9, 13), ymd(2024, 9, 20))
        .await
        .unwrap();

    assert_eq!(days, vec![ymd(2024, 9, 13), ymd(2024, 9, 19), ymd(2024, 9, 20)]);
}

#[tokio::test]
async fn test_next_and_previous_business_day() {
    let client = korea_client();

    // Friday before the Chuseok weekend and holidays
    assert_eq!(
        client.get_next_business_day(ymd(2024, 9, 13)).await.unwrap(),
        ymd(2024, 9, 19)
    );
    assert_eq!(
        client
            .get_previous_business_day(ymd(2024, 9, 19))
            .await
            .unwrap(),
        ymd(2024, 9, 13)
    );

    // Strictly after even when the start is a business day
    assert_eq!(
        client.get_next_business_day(ymd(2024, 9, 19)).await.unwrap(),
        ymd(2024, 9, 20)
    );
}

#[tokio::test]
async fn test_next_business_day_crosses_year() {
    let client = korea_client();

    assert_eq!(
        client.get_next_business_day(ymd(2024, 12, 31)).await.unwrap(),
        ymd(2025, 1, 2)
    );
    assert_eq!(
        client
            .get_previous_business_day(ymd(2025, 1, 2))
            .await
            .unwrap(),
        ymd(2024, 12, 31)
    );
    assert_eq!(
        client.get_next_business_day(ymd(2025, 1, 27)).await.unwrap(),
        ymd(2025, 1, 31)
    );
}

#[tokio::test]
async fn test_add_business_days() {
    let client = korea_client();

    assert_eq!(
        client.add_business_days(ymd(2024, 9, 13), 3).await.unwrap(),
        ymd(2024, 9, 23)
    );
    assert_eq!(
        client.add_business_days(ymd(2024, 9, 23), -3).await.unwrap(),
        ymd(2024, 9, 13)
    );
    assert_eq!(
        client.add_business_days(ymd(2024, 12, 27), 3).await.unwrap(),
        ymd(2025, 1, 2)
    );
}

#[tokio::test]
async fn test_add_business_days_loads_the_landing_year() {
    let client = korea_client();

    // The estimated window ends on 2024-12-31; the walk crosses 2025-01-01.
    let landed = client.add_business_days(ymd(2024, 1, 2), 250).await.unwrap();

    assert_eq!(landed, ymd(2025, 1, 6));
    let mut years = client.source().fetched_years();
    years.sort_unstable();
    assert_eq!(years, vec![2024, 2025]);
}

#[tokio::test]
async fn test_next_business_day_after_long_closure_loads_next_year() {
    let december = (1..=31).map(|day| {
        Holiday::new(format!("dec_{day}"), "연말 휴무", ymd(2024, 12, day), HolidayType::Custom)
    });
    let january = (1..=10).map(|day| {
        Holiday::new(format!("jan_{day}"), "연초 휴무", ymd(2025, 1, day), HolidayType::Custom)
    });
    let source = MockHolidaySource::new()
        .with_year(2024, december.collect())
        .with_year(2025, january.collect());
    let client = HudyClient::with_source(test_config(), source);

    // Friday; the 31 day window only reaches 2024-12-30.
    let next = client.get_next_business_day(ymd(2024, 11, 29)).await.unwrap();

    assert_eq!(next, ymd(2025, 1, 13));
}

#[tokio::test]
async fn test_walks_past_supported_years_are_rejected() {
    let client = korea_client();

    let err = client.get_next_business_day(ymd(2100, 12, 31)).await.unwrap_err();
    assert!(matches!(
        err,
        HudyError::Validation(ValidationError::InvalidYear { year: 2101 })
    ));

    let err = client
        .add_business_days(ymd(2100, 6, 1), 1_000)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        HudyError::Validation(ValidationError::InvalidYear { .. })
    ));

    let err = client
        .add_business_days(ymd(2024, 6, 1), i64::MAX)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        HudyError::Validation(ValidationError::InvalidYear { .. })
    ));
}

#[tokio::test]
async fn test_is_business_day_checks_year_before_weekend() {
    let client = korea_client();

    // Saturday and Monday of an unsupported year
    for date in [ymd(1800, 1, 4), ymd(1800, 1, 6)] {
        let err = client.is_business_day(date).await.unwrap_err();
        assert!(matches!(
            err,
            HudyError::Validation(ValidationError::InvalidYear { year: 1800 })
        ));
    }
}

#[tokio::test]
async fn test_add_zero_business_days_is_identity() {
    let client = korea_client();
    let holiday = ymd(2024, 12, 25);

    assert_eq!(client.add_business_days(holiday, 0).await.unwrap(), holiday);
    assert_eq!(client.source().fetch_count(), 0);
}

#[tokio::test]
async fn test_source_errors_propagate_and_are_not_cached() {
    let source = korea_source().with_errors([ApiError::from_status(401, "Invalid API key")]);
    let client = HudyClient::with_source(test_config(), source);

    let err = client.get_holidays(2024).await.unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::Unauthorized));
    assert!(err.to_string().contains("Invalid API key"));
    assert_eq!(client.cache_stats().await.size, 0);

    let holidays = client.get_holidays(2024).await.unwrap();
    assert_eq!(holidays.len(), 17);
    assert_eq!(client.source().fetch_count(), 2);
}

#[tokio::test]
async fn test_business_day_query_fails_when_a_year_fails() {
    let source = korea_source().with_errors([ApiError::network_error("connection refused")]);
    let client = HudyClient::with_source(test_config(), source);

    let err = client
        .get_business_days(ymd(2024, 1, 1), ymd(2024, 1, 31))
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::NetworkError));
}

#[tokio::test(start_paused = true)]
async fn test_retrying_source_recovers_from_transient_errors() {
    let source = korea_source().with_errors([
        ApiError::from_status(503, "Service Unavailable"),
        ApiError::timeout("Request timeout after 10s"),
    ]);
    let client = HudyClient::with_source(
        test_config(),
        RetryingSource::new(source, fast_retry(3)),
    );

    let holidays = client.get_holidays(2024).await.unwrap();

    assert_eq!(holidays.len(), 17);
    assert_eq!(client.source().inner().fetch_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_retrying_source_stops_on_client_errors() {
    let source = korea_source().with_errors([ApiError::from_status(404, "Not Found")]);
    let client = HudyClient::with_source(
        test_config(),
        RetryingSource::new(source, fast_retry(3)),
    );

    let err = client.get_holidays(2024).await.unwrap_err();

    assert_eq!(err.code(), Some(ErrorCode::NotFound));
    assert_eq!(client.source().inner().fetch_count(), 1);
}

#[tokio::test]
async fn test_clear_cache_resets_everything() {
    let client = korea_client();
    client.get_holidays(2024).await.unwrap();
    client.get_holidays(2024).await.unwrap();

    client.clear_cache().await;

    let stats = client.cache_stats().await;
    assert_eq!((stats.hits, stats.misses, stats.size), (0, 0, 0));
    assert!(stats.entries.is_empty());

    client.get_holidays(2024).await.unwrap();
    assert_eq!(client.source().fetch_count(), 2);
}

#[tokio::test]
async fn test_prune_cache_drops_expired_years() {
    let config = config_builder()
        .cache_ttl(Duration::from_millis(1))
        .build()
        .unwrap();
    let client = HudyClient::with_source(config, korea_source());

    client.get_holidays(2024).await.unwrap();
    client.get_holidays(2025).await.unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(client.prune_cache().await, 2);
    assert_eq!(client.cache_stats().await.size, 0);
    assert_eq!(client.prune_cache().await, 0);
}

#[tokio::test]
async fn test_expired_year_is_refetched() {
    let config = config_builder()
        .cache_ttl(Duration::from_millis(1))
        .build()
        .unwrap();
    let client = HudyClient::with_source(config, korea_source());

    client.get_holidays(2024).await.unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;
    client.get_holidays(2024).await.unwrap();

    assert_eq!(client.source().fetch_count(), 2);
    let stats = client.cache_stats().await;
    assert_eq!((stats.hits, stats.misses), (0, 2));
}

#[tokio::test]
async fn test_year_based_expiry_tiers() {
    let client = korea_client();
    let current = Utc::now().year();

    client.get_holidays(current - 1).await.unwrap();
    client.get_holidays(current).await.unwrap();
    client.get_holidays(current + 1).await.unwrap();

    let stats = client.cache_stats().await;
    let remaining: Vec<_> = stats
        .entries
        .iter()
        .map(|e| (e.expires_at - Utc::now()).num_hours())
        .collect();

    // 365 days, 1 day, 7 days (minus test runtime)
    assert!((365 * 24 - 1..=365 * 24).contains(&remaining[0]), "{remaining:?}");
    assert!((23..=24).contains(&remaining[1]), "{remaining:?}");
    assert!((7 * 24 - 1..=7 * 24).contains(&remaining[2]), "{remaining:?}");
}

#[tokio::test]
async fn test_disabled_cache_fetches_every_time() {
    let config = config_builder().disable_cache().build().unwrap();
    let client = HudyClient::with_source(config, korea_source());

    client.get_holidays(2024).await.unwrap();
    client.get_holidays(2024).await.unwrap();

    assert_eq!(client.source().fetch_count(), 2);
    let stats = client.cache_stats().await;
    assert_eq!((stats.hits, stats.misses, stats.size), (0, 0, 0));
}

#[tokio::test]
async fn test_cache_stats_serialize_with_epoch_millis() {
    let client = korea_client();
    client.get_holidays(2024).await.unwrap();

    let stats = client.cache_stats().await;
    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["size"], 1);
    assert_eq!(json["entries"][0]["key"], "year:2024");
    assert_eq!(
        json["entries"][0]["expiresAt"].as_i64(),
        Some(stats.entries[0].expires_at.timestamp_millis())
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_callers_see_the_same_year() {
    let client = Arc::new(korea_client());

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_holidays(2024).await })
        })
        .collect();

    for task in tasks {
        let holidays = task.await.unwrap().unwrap();
        assert_eq!(holidays, korea_2024());
    }

    let stats = client.cache_stats().await;
    assert_eq!(stats.size, 1);
    assert_eq!(stats.hits + stats.misses, 8);
}
