use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::helpers::err_response;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("OpenAI API key is not configured")]
    ConfigurationMissing,

    #[error("Failed to access OpenAI API: {0}")]
    UpstreamError(String),

    #[error("No choices in response")]
    EmptyCompletion,

    #[error("Failed to parse completion content: {0}")]
    MalformedCompletion(String),

    #[error("Internal server error: {0}")]
    InternalFault(String),
}

impl RelayError {
    /// Caller-facing `error` field.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            RelayError::ConfigurationMissing => "OpenAI API key is not configured",
            RelayError::UpstreamError(_) => "OpenAI API Error",
            RelayError::EmptyCompletion => "Failed to generate response",
            RelayError::MalformedCompletion(_) => "Invalid response format",
            RelayError::InternalFault(_) => "Internal server error",
        }
    }

    /// Caller-facing `details` field, if the variant carries one.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        match self {
            RelayError::ConfigurationMissing => None,
            RelayError::EmptyCompletion => Some("No choices in response"),
            RelayError::UpstreamError(msg)
            | RelayError::MalformedCompletion(msg)
            | RelayError::InternalFault(msg) => Some(msg.as_str()),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        err_response(self.status_code(), self.label(), self.details())
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::UpstreamError(error.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::MalformedCompletion(error.to_string())
    }
}
