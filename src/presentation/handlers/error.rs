use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::CritiqueError;
use crate::presentation::config::FALLBACK_API_KEY_VAR;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Caller-facing failure. Every handler error collapses into one of these.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("{0}")]
    ServiceUnavailable(String),
    #[error("{0}")]
    BadGateway(String),
}

impl ApiError {
    /// Maps an extractor failure, keeping the body-limit breach distinct from
    /// a malformed body.
    pub fn rejected(status: StatusCode, message: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(message)
        } else {
            Self::InvalidInput(message)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<CritiqueError> for ApiError {
    fn from(error: CritiqueError) -> Self {
        match error {
            CritiqueError::MissingCredential => Self::ServiceUnavailable(format!(
                "{FALLBACK_API_KEY_VAR} is not configured. Add it (or APP_LLM__API_KEY) to .env."
            )),
            CritiqueError::EmptyFile => Self::InvalidInput("File is empty.".to_string()),
            CritiqueError::UnreadableFile(e) => {
                Self::InvalidInput(format!("Could not read file: {e}"))
            }
            CritiqueError::NoExtractableText => Self::InvalidInput(
                "File does not contain extractable text (e.g. image-only PDF).".to_string(),
            ),
            CritiqueError::MissingResumeText => {
                Self::InvalidInput("Missing resume text".to_string())
            }
            CritiqueError::InvalidCredential => Self::ServiceUnavailable(format!(
                "Invalid API key. Check {FALLBACK_API_KEY_VAR} (or APP_LLM__API_KEY) in .env."
            )),
            CritiqueError::Upstream(message) => {
                Self::BadGateway(format!("AI service error: {message}"))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
