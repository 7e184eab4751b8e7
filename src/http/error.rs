//! Classification of HTTP status errors from the management API.

use reqwest::StatusCode;

/// Client-side API errors with user-friendly messages.
#[derive(Debug)]
pub enum ApiError {
    /// Authentication failed (HTTP 401)
    AuthenticationFailed(String),
    /// Forbidden access (HTTP 403)
    Forbidden(String),
    /// Resource not found (HTTP 404)
    NotFound(String),
    /// Other 4xx client errors
    ClientError(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::AuthenticationFailed(msg) => {
                write!(f, "Authentication failed: {}. Check your TNAPPS_API_KEY.", msg)
            }
            ApiError::Forbidden(msg) => {
                write!(f, "Access forbidden: {}. You may need authentication.", msg)
            }
            ApiError::NotFound(msg) => {
                write!(f, "Not found: {}", msg)
            }
            ApiError::ClientError(msg) => {
                write!(f, "Request error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Classifies a status error from `error_for_status()`.
/// Returns Ok(()) for server/transport errors, Err with a user-friendly
/// message for client errors.
pub fn classify_status(error: &reqwest::Error) -> Result<(), ApiError> {
    if let Some(status) = error.status() {
        match status {
            StatusCode::UNAUTHORIZED => {
                return Err(ApiError::AuthenticationFailed(
                    "Invalid or missing API key".to_string(),
                ));
            }
            StatusCode::FORBIDDEN => {
                return Err(ApiError::Forbidden(
                    "Access to this resource is forbidden".to_string(),
                ));
            }
            StatusCode::NOT_FOUND => {
                return Err(ApiError::NotFound(
                    "The requested resource was not found".to_string(),
                ));
            }
            s if s.is_client_error() => {
                return Err(ApiError::ClientError(format!("HTTP {} error", s.as_u16())));
            }
            // 5xx server errors pass through unchanged
            _ => {}
        }
    }

    Ok(())
}

/// Converts an error from `error_for_status()` into an anyhow error,
/// replacing recognized client errors with a user-friendly ApiError.
pub fn check_status(error: reqwest::Error) -> anyhow::Error {
    match classify_status(&error) {
        Ok(()) => anyhow::Error::from(error),
        Err(api_error) => anyhow::Error::from(api_error),
    }
}
