use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Request-level failures. The `IntoResponse` impl is the single place where
/// they are logged and mapped to status codes; anything that is not a
/// validation failure falls through to `Unhandled` and a 500.
#[derive(Debug)]
pub enum CallbackError {
    MissingCallbackUrl,
    InvalidUrl(url::ParseError),
    Unhandled(anyhow::Error),
}

impl Display for CallbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallbackError::MissingCallbackUrl => write!(f, "Callback URL is missing"),
            CallbackError::InvalidUrl(e) => write!(f, "Invalid callback URL format: {}", e),
            CallbackError::Unhandled(e) => write!(f, "Internal server error: {}", e),
        }
    }
}

impl From<url::ParseError> for CallbackError {
    fn from(error: url::ParseError) -> Self {
        CallbackError::InvalidUrl(error)
    }
}

impl From<anyhow::Error> for CallbackError {
    fn from(error: anyhow::Error) -> Self {
        CallbackError::Unhandled(error)
    }
}

impl IntoResponse for CallbackError {
    fn into_response(self) -> Response {
        match self {
            CallbackError::MissingCallbackUrl => {
                error!("Callback URL is missing");
                (StatusCode::BAD_REQUEST, "Callback URL is missing").into_response()
            }
            CallbackError::InvalidUrl(e) => {
                error!(error = %e, "Invalid callback URL format");
                (StatusCode::BAD_REQUEST, "Invalid callback URL format").into_response()
            }
            CallbackError::Unhandled(e) => {
                error!(error = ?e, "Unhandled error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
