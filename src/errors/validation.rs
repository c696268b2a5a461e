// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Input and configuration validation errors.

use crate::types::holiday::{MAX_YEAR, MIN_YEAR};

/// Errors for inputs rejected before any request is made.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Requested year is outside the range the service covers.
    #[error(
        "Year must be an integer between {min} and {max}, got {year}",
        min = MIN_YEAR,
        max = MAX_YEAR
    )]
    InvalidYear {
        /// The rejected year
        year: i32,
    },

    /// API key does not carry the live key prefix.
    #[error("API key must start with {prefix}")]
    InvalidApiKey {
        /// Required prefix
        prefix: &'static str,
    },

    /// API key contains bytes that cannot travel in an HTTP header.
    #[error("API key contains characters not allowed in an HTTP header")]
    MalformedApiKey,

    /// Base URL could not be parsed.
    #[error("Invalid base URL {url}")]
    InvalidBaseUrl {
        /// The rejected URL
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A holiday record violates its date invariants.
    #[error("Invalid holiday date {date}: {reason}")]
    InvalidHolidayDate {
        /// The offending date string
        date: String,
        /// Why it was rejected
        reason: String,
    },

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

impl ValidationError {
    pub fn invalid_year(year: i32) -> Self {
        ValidationError::InvalidYear { year }
    }

    pub fn invalid_holiday_date(date: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidHolidayDate {
            date: date.into(),
            reason: reason.into(),
        }
    }
}
