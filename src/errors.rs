use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Message returned to callers whenever the upstream answers with a non-2xx status.
pub const UPSTREAM_REJECTED_MESSAGE: &str = "The request to the upstream service failed.";

/// Longest slice of an upstream body written to the server log.
const LOGGED_BODY_LIMIT: usize = 500;

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Cross-field criteria not met; detected before any network call.
    Validation(String),
    /// Body or header could not be parsed into the endpoint's request shape.
    InvalidRequest(String),
    /// Body exceeded the configured size limit.
    PayloadTooLarge(String),
    /// Body was not sent as `application/json`.
    UnsupportedMediaType(String),
    /// Credentials or client setup unusable.
    Configuration(String),
    /// Upstream did not answer within the configured timeout.
    UpstreamTimeout(String),
    /// DNS, connect or transport failure reaching the upstream.
    UpstreamConnection(String),
    /// Upstream answered with a non-2xx status.
    UpstreamRejection { status: u16, body: String },
    /// Upstream answered 2xx with a body that is not JSON.
    UpstreamInvalidResponse(String),
    /// Internal server error.
    Internal(String),
}

impl AppError {
    /// Stable machine-readable identifier included in every error body.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::InvalidRequest(_) => "invalid_request",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::UnsupportedMediaType(_) => "unsupported_media_type",
            AppError::Configuration(_) => "configuration_error",
            AppError::UpstreamTimeout(_) => "upstream_timeout",
            AppError::UpstreamConnection(_) => "upstream_unavailable",
            AppError::UpstreamRejection { .. } => "upstream_rejected",
            AppError::UpstreamInvalidResponse(_) => "upstream_invalid_response",
            AppError::Internal(_) => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Configuration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::UpstreamConnection(_)
            | AppError::UpstreamRejection { .. }
            | AppError::UpstreamInvalidResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            AppError::UnsupportedMediaType(msg) => write!(f, "Unsupported media type: {}", msg),
            AppError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            AppError::UpstreamTimeout(msg) => write!(f, "Upstream timeout: {}", msg),
            AppError::UpstreamConnection(msg) => write!(f, "Upstream connection error: {}", msg),
            AppError::UpstreamRejection { status, body } => write!(
                f,
                "Upstream returned {}: {}",
                status,
                truncate_for_log(body)
            ),
            AppError::UpstreamInvalidResponse(msg) => {
                write!(f, "Upstream returned an unreadable body: {}", msg)
            }
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Caller-caused errors carry their detail; everything upstream- or
    /// server-side is logged in full and answered with a sanitized message.
    fn into_response(self) -> Response {
        let error_message = match &self {
            AppError::Validation(msg) => {
                tracing::info!("Rejected by criteria validation: {}", msg);
                msg.clone()
            }
            AppError::InvalidRequest(msg)
            | AppError::PayloadTooLarge(msg)
            | AppError::UnsupportedMediaType(msg) => {
                tracing::info!("Rejected malformed request: {}", msg);
                msg.clone()
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                "Service is not configured correctly".to_string()
            }
            AppError::UpstreamTimeout(msg) => {
                tracing::error!("Upstream timeout: {}", msg);
                "The upstream service did not respond in time.".to_string()
            }
            AppError::UpstreamConnection(msg) => {
                tracing::error!("Upstream connection error: {}", msg);
                "The upstream service could not be reached.".to_string()
            }
            AppError::UpstreamRejection { status, body } => {
                tracing::error!(
                    "Invalid request to upstream. Status: {}, Response: {}",
                    status,
                    truncate_for_log(body)
                );
                UPSTREAM_REJECTED_MESSAGE.to_string()
            }
            AppError::UpstreamInvalidResponse(msg) => {
                tracing::error!("Upstream returned an unreadable body: {}", msg);
                "The upstream service returned an invalid response.".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
            "kind": self.kind(),
        }));

        (self.status_code(), body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    /// Keeps the status axum assigns to the rejection; only unparseable or
    /// mistyped bodies become 422.
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(message),
            StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::UnsupportedMediaType(message),
            _ => AppError::InvalidRequest(message),
        }
    }
}

/// Cuts an upstream body down to a loggable size on a char boundary.
pub fn truncate_for_log(body: &str) -> String {
    match body.char_indices().nth(LOGGED_BODY_LIMIT) {
        Some((idx, _)) => format!("{}... [truncated]", &body[..idx]),
        None => body.to_string(),
    }
}
