/// Walkthrough of the hudy client against the live holiday service
///
/// This example shows how to:
/// 1. Build a client from an API key
/// 2. List the holidays of a year and of a date range
/// 3. Check single dates
/// 4. Count and list business days
/// 5. Find neighbouring business days and add business days
/// 6. Inspect and clear the cache
///
/// Run with:
/// ```bash
/// HUDY_API_KEY=hd_live_your_key \
/// cargo run --example basic_usage
/// ```
use anyhow::{Context, Result};
use chrono::NaiveDate;
use hudy::{format_date, ClientConfigBuilder, HudyClient};
use std::env;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn date(value: &str) -> Result<NaiveDate> {
    hudy::parse_date(value).with_context(|| format!("invalid date {value}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();

    let api_key = env::var("HUDY_API_KEY").unwrap_or_else(|_| "hd_live_demo".to_string());

    let config = ClientConfigBuilder::new(api_key)
        .timeout(Duration::from_secs(10))
        .build()
        .context("Invalid client configuration")?;
    let client = HudyClient::new(config).context("Failed to create client")?;

    info!("Listing 2024 holidays");
    let holidays = client.get_holidays(2024).await?;
    println!("\n=== 2024 Holidays ({}) ===", holidays.len());
    for holiday in &holidays {
        println!("{}  {:<9}  {}", holiday.date, holiday.day_of_week, holiday.name);
    }

    let (from, to) = (date("2024-09-01")?, date("2024-09-30")?);
    let september = client.get_holidays_by_range(from, to).await?;
    println!("\n=== September 2024 ===");
    for holiday in &september {
        println!("{}  {}", holiday.date, holiday.name);
    }

    println!("\n=== Single Dates ===");
    for value in ["2024-01-01", "2024-09-17", "2024-09-19", "2024-09-21"] {
        let day = date(value)?;
        println!(
            "{value}: holiday={}, business day={}",
            client.is_holiday(day).await?,
            client.is_business_day(day).await?
        );
    }

    println!("\n=== Business Days ===");
    let count = client
        .get_business_days(date("2024-01-01")?, date("2024-12-31")?)
        .await?;
    println!("2024 has {count} business days");

    let week = client
        .get_business_days_in_range(date("2024-09-13")?, date("2024-09-20")?)
        .await?;
    let week: Vec<String> = week.into_iter().map(format_date).collect();
    println!("2024-09-13..2024-09-20: {}", week.join(", "));

    let friday = date("2024-09-13")?;
    println!(
        "after {friday}: {}",
        client.get_next_business_day(friday).await?
    );
    println!(
        "before 2024-09-19: {}",
        client.get_previous_business_day(date("2024-09-19")?).await?
    );
    println!(
        "{friday} + 5 business days: {}",
        client.add_business_days(friday, 5).await?
    );
    println!(
        "{friday} - 5 business days: {}",
        client.add_business_days(friday, -5).await?
    );

    println!("\n=== Cache ===");
    let stats = client.cache_stats().await;
    println!("{stats}");
    for entry in &stats.entries {
        println!("{} expires {}", entry.key, entry.expires_at);
    }

    client.clear_cache().await;
    info!(stats = %client.cache_stats().await, "Cache cleared");

    Ok(())
}
