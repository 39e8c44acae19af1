use crate::config::Credentials;
use crate::errors::AppError;
use crate::search_kind::SEARCH_TYPE_HEADER;
use axum::body::Bytes;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Map, Value};
use std::time::Duration;

const AP_NAME_HEADER: &str = "galaxy-ap-name";
const AP_PASSWORD_HEADER: &str = "galaxy-ap-password";

/// Client for the EnformionGO search API.
///
/// Credentials are installed as default headers once; each call only adds
/// its search-type discriminator.
#[derive(Clone)]
pub struct EnformionClient {
    client: reqwest::Client,
}

impl EnformionClient {
    /// Creates a new `EnformionClient`.
    ///
    /// # Arguments
    ///
    /// * `credentials` - The galaxy AP name/password pair.
    /// * `timeout` - Upper bound for a whole upstream call.
    pub fn new(credentials: &Credentials, timeout: Duration) -> Result<Self, AppError> {
        if credentials.ap_name.trim().is_empty() || credentials.ap_password.trim().is_empty() {
            return Err(AppError::Configuration(
                "API credentials (GALAXY_AP_NAME, GALAXY_AP_PASSWORD) are not configured."
                    .to_string(),
            ));
        }

        let ap_name = HeaderValue::from_str(&credentials.ap_name).map_err(|_| {
            AppError::Configuration("GALAXY_AP_NAME is not a valid header value".to_string())
        })?;
        let mut ap_password = HeaderValue::from_str(&credentials.ap_password).map_err(|_| {
            AppError::Configuration("GALAXY_AP_PASSWORD is not a valid header value".to_string())
        })?;
        ap_password.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AP_NAME_HEADER, ap_name);
        headers.insert(AP_PASSWORD_HEADER, ap_password);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::Configuration(format!("Failed to create upstream client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Posts a normalized payload and returns the upstream body untouched.
    ///
    /// # Arguments
    ///
    /// * `url` - Upstream endpoint for the search kind.
    /// * `search_type` - Value for the `galaxy-search-type` header.
    /// * `payload` - Normalized request body.
    ///
    /// # Returns
    ///
    /// * `Result<Bytes, AppError>` - The raw JSON body on 2xx, or a classified upstream failure.
    pub async fn search(
        &self,
        url: &str,
        search_type: &str,
        payload: &Map<String, Value>,
    ) -> Result<Bytes, AppError> {
        tracing::debug!(
            "POST {} ({}={}) with {} field(s)",
            url,
            SEARCH_TYPE_HEADER,
            search_type,
            payload.len()
        );

        let response = self
            .client
            .post(url)
            .header(SEARCH_TYPE_HEADER, search_type)
            .json(payload)
            .send()
            .await
            .map_err(|e| classify_transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::UpstreamRejection {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify_transport_error(url, e))?;

        serde_json::from_slice::<serde::de::IgnoredAny>(&body).map_err(|e| {
            AppError::UpstreamInvalidResponse(format!("{} returned non-JSON body: {}", url, e))
        })?;

        Ok(body)
    }
}

fn classify_transport_error(url: &str, err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::UpstreamTimeout(format!("Request to {} timed out: {}", url, err))
    } else {
        AppError::UpstreamConnection(format!("Error communicating with {}: {}", url, err))
    }
}
