// SPDX-FileCopyrightText: 2025 Hudy
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP holiday source backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::{debug, Instrument};
use url::Url;

use crate::config::constants::{API_KEY_HEADER, HOLIDAYS_PATH};
use crate::config::ClientConfig;
use crate::errors::{ApiError, ValidationError};
use crate::tracing::spans;
use crate::transport::response::decode_response;
use crate::transport::HolidaySource;
use crate::types::holiday::Holiday;

/// Fetches one year per request from `GET {base_url}/v1/holidays?year=Y`.
///
/// Every request carries the API key header and a JSON content type. The
/// configured timeout bounds the whole request.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(config: &ClientConfig) -> Result<Self, ValidationError> {
        let mut api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| ValidationError::MalformedApiKey)?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(ValidationError::HttpClient)?;

        let raw = format!("{}{}", config.base_url.trim_end_matches('/'), HOLIDAYS_PATH);
        let endpoint = Url::parse(&raw).map_err(|source| ValidationError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;

        Ok(Self {
            client,
            endpoint,
            timeout: config.timeout,
        })
    }

    /// Endpoint without the year query
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn url_for(&self, year: i32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("year", &year.to_string());
        url
    }

    fn map_send_error(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::timeout(format!(
                "Request timeout after {}s",
                self.timeout.as_secs_f64()
            ))
        } else {
            ApiError::network_error(format!("Network error: {error}"))
        }
    }
}

#[async_trait]
impl HolidaySource for HttpSource {
    async fn fetch_year(&self, year: i32) -> Result<Vec<Holiday>, ApiError> {
        let url = self.url_for(year);

        async {
            debug!(url = %url, "Sending holiday request");

            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| self.map_send_error(e))?;

            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| self.map_send_error(e))?;

            debug!(status, bytes = body.len(), "Received holiday response");
            decode_response(status, &body)
        }
        .instrument(spans::fetch_year(self.name(), year))
        .await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
