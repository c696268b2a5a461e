// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! Response envelope of the Hudy service
//!
//! Every reply is a JSON object whose boolean `result` field says which shape
//! the rest of the object has:
//!
//! ```text
//! {"result": true,  "data":  [ <holiday>, ... ]}
//! {"result": false, "error": {"message": "..."}}
//! ```
//!
//! The body is decoded once into [`ApiResponse`], switching on `result`.

use serde::Deserialize;

use crate::config::constants::ERROR_BODY_EXCERPT;
use crate::errors::ApiError;
use crate::types::holiday::Holiday;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Decoded service envelope
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEnvelope")]
pub enum ApiResponse {
    /// `result: true`
    Success(Vec<Holiday>),
    /// `result: false`
    Failure {
        /// `error.message`, or `Unknown error` when the service sent none
        message: String,
    },
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    result: bool,
    #[serde(default)]
    data: Option<Vec<Holiday>>,
    #[serde(default)]
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl TryFrom<RawEnvelope> for ApiResponse {
    type Error = String;

    fn try_from(raw: RawEnvelope) -> Result<Self, Self::Error> {
        match (raw.result, raw.data, raw.error) {
            (true, Some(data), _) => Ok(ApiResponse::Success(data)),
            (true, None, _) => Err("success envelope without data".to_string()),
            (false, _, Some(error)) => Ok(ApiResponse::Failure {
                message: error.message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            }),
            (false, _, None) => Err("error envelope without error".to_string()),
        }
    }
}

/// Turns an HTTP status and body into holidays or a classified error
///
/// - Body is not JSON: `InvalidResponse`.
/// - Success envelope: the holidays, each checked with [`Holiday::validate`].
/// - Error envelope: mapped from the HTTP status, carrying the service message.
/// - JSON that is no envelope: mapped from the status when it is not 2xx,
///   otherwise `InvalidResponse`.
pub(crate) fn decode_response(status: u16, body: &str) -> Result<Vec<Holiday>, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ApiError::invalid_response(format!("Invalid JSON response: {e}")))?;

    match ApiResponse::deserialize(value) {
        Ok(ApiResponse::Success(holidays)) => {
            for holiday in &holidays {
                holiday
                    .validate()
                    .map_err(|e| ApiError::invalid_response(e.to_string()))?;
            }
            Ok(holidays)
        }
        Ok(ApiResponse::Failure { message }) => Err(ApiError::from_status(status, message)),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::from_status(
            status,
            format!("HTTP {status}: {}", excerpt(body)),
        )),
        Err(e) => Err(ApiError::invalid_response(format!(
            "Response does not match expected format: {e}"
        ))),
    }
}

fn excerpt(body: &str) -> String {
    body.chars().take(ERROR_BODY_EXCERPT).collect()
}
