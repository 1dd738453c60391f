// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::ecourts::ProviderError;

pub const UNKNOWN_SERVER_ERROR: &str = "Unknown server error";

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    MissingCnr,
    InvalidJson(String),
    BadRequest(String),

    // 500 Internal Server Error
    ServerError(String),

    // 503 Service Unavailable
    ProviderNotConfigured,
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MissingCnr => 400,
            ApiError::InvalidJson(_) => 400,
            ApiError::BadRequest(_) => 400,
            ApiError::ServerError(_) => 500,
            ApiError::ProviderNotConfigured => 503,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::MissingCnr => "CNR number is required",
            ApiError::InvalidJson(msg) => msg,
            ApiError::BadRequest(msg) => msg,
            ApiError::ServerError(msg) => msg,
            ApiError::ProviderNotConfigured => "eCourts API key is not configured",
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::MissingCnr => "MISSING_CNR",
            ApiError::InvalidJson(_) => "INVALID_JSON",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ServerError(_) => "SERVER_ERROR",
            ApiError::ProviderNotConfigured => "PROVIDER_NOT_CONFIGURED",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "success": false,
            "error": self.error_code(),
            "message": self.message()
        })
    }
}

impl ApiError {
    pub fn invalid_json(message: impl Into<String>) -> Self {
        ApiError::InvalidJson(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Empty fault descriptions collapse to a fixed message.
    pub fn server_error(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            ApiError::ServerError(UNKNOWN_SERVER_ERROR.to_string())
        } else {
            ApiError::ServerError(message)
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        tracing::error!("eCourts provider fault: {}", err);
        ApiError::server_error(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
