// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the hudy client.
//!
//! Errors follow a hybrid approach:
//!
//! - **Concern-specific errors** for fine-grained handling:
//!   [`BusinessDayError`] for date range arithmetic, [`ApiError`] for service
//!   and network failures, [`ValidationError`] for rejected inputs.
//! - **Unified error type** ([`HudyError`]) returned by [`crate::HudyClient`],
//!   into which every concern-specific error converts via `From`.
//!
//! Cache operations never fail. A cache miss or an expired entry is reported
//! as `None`, never as an error.
//!
//! # Examples
//!
//! ```rust,ignore
//! use hudy::{ErrorCode, HudyClient, HudyError};
//!
//! match client.get_holidays(2024).await {
//!     Ok(holidays) => println!("{} holidays", holidays.len()),
//!     Err(HudyError::Api(e)) if e.code == ErrorCode::Unauthorized => {
//!         eprintln!("check HUDY_API_KEY");
//!     }
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```

mod api;
mod business_days;
mod validation;

pub use api::{ApiError, ErrorCode};
pub use business_days::BusinessDayError;
pub use validation::ValidationError;

/// Unified error type for all client operations.
#[derive(Debug, thiserror::Error)]
pub enum HudyError {
    /// The service could not be reached or rejected the request.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A business day range was reversed.
    #[error("Business day error: {0}")]
    BusinessDay(#[from] BusinessDayError),

    /// An input or configuration value was rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl HudyError {
    /// The service error code, when this is an [`ApiError`]
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            HudyError::Api(e) => Some(e.code),
            _ => None,
        }
    }
}
