use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failure raised while negotiating a language from the request path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NegotiationError {
    /// The prefix was well-formed but the country or the language is unknown.
    #[error("No country '{country_code}' with language '{langcode}'")]
    NotFound {
        country_code: String,
        langcode: String,
    },
}

impl NegotiationError {
    pub fn not_found(country_code: impl Into<String>, langcode: impl Into<String>) -> Self {
        Self::NotFound {
            country_code: country_code.into(),
            langcode: langcode.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

impl IntoResponse for NegotiationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            code: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
