// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for talking to the Hudy service.
//!
//! Every failure of a holiday fetch, whether it happened on the network or was
//! reported by the service, is an [`ApiError`] classified by an [`ErrorCode`].
//! The `retryable` flag drives [`crate::transport::RetryingSource`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a failed service call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NetworkError,
    Timeout,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    BadRequest,
    InternalError,
    InvalidResponse,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::RateLimited => "RATE_LIMITED",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::InvalidResponse => "INVALID_RESPONSE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed holiday fetch.
///
/// # Examples
///
/// ```
/// use hudy::{ApiError, ErrorCode};
///
/// let err = ApiError::from_status(429, "slow down");
/// assert_eq!(err.code, ErrorCode::RateLimited);
/// assert!(err.retryable);
/// assert_eq!(err.to_string(), "[RATE_LIMITED] HTTP 429: slow down");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{code}] {}", describe(.status, .message))]
pub struct ApiError {
    /// What kind of failure this is
    pub code: ErrorCode,
    /// HTTP status, when the service answered at all
    pub status: Option<u16>,
    /// Human readable detail, usually from the service's error envelope
    pub message: String,
    /// Whether repeating the same request may succeed
    pub retryable: bool,
}

fn describe(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("HTTP {status}: {message}"),
        None => message.to_string(),
    }
}

impl ApiError {
    pub fn new(
        code: ErrorCode,
        status: Option<u16>,
        message: impl Into<String>,
        retryable: bool,
    ) -> Self {
        Self {
            code,
            status,
            message: message.into(),
            retryable,
        }
    }

    /// Maps an HTTP status to an error.
    ///
    /// 429 and every 5xx are retryable; other client errors are not.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let (code, retryable) = match status {
            400 => (ErrorCode::BadRequest, false),
            401 => (ErrorCode::Unauthorized, false),
            403 => (ErrorCode::Forbidden, false),
            404 => (ErrorCode::NotFound, false),
            429 => (ErrorCode::RateLimited, true),
            _ => (ErrorCode::InternalError, status >= 500),
        };
        Self::new(code, Some(status), message, retryable)
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkError, None, message, true)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Timeout, None, message, true)
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidResponse, None, message, false)
    }
}
