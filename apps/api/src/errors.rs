use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::ExportError;
use crate::github::GithubError;
use crate::llm_client::LlmError;
use crate::resume::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("GitHub error: {0}")]
    GitHub(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Llm(e.to_string())
    }
}

impl From<GithubError> for AppError {
    fn from(e: GithubError) -> Self {
        match e {
            GithubError::NotFound(user) => {
                AppError::NotFound(format!("GitHub user '{user}' not found"))
            }
            GithubError::InvalidUsername(user) => {
                AppError::Validation(format!("'{user}' is not a valid GitHub username"))
            }
            other => AppError::GitHub(other.to_string()),
        }
    }
}

impl From<ExtractError> for AppError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::Unsupported(_) => AppError::UnsupportedMediaType(e.to_string()),
            ExtractError::TooLarge { .. } => AppError::PayloadTooLarge(e.to_string()),
            ExtractError::NoText | ExtractError::Pdf(_) | ExtractError::Docx(_) => {
                AppError::UnprocessableEntity(e.to_string())
            }
        }
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        AppError::Internal(anyhow::Error::new(e))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
            ),
            AppError::UnsupportedMediaType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                msg.clone(),
            ),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::GitHub(msg) => {
                tracing::error!("GitHub error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GITHUB_ERROR",
                    "Could not fetch data from GitHub".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::UnprocessableEntity("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::PayloadTooLarge("x".into()), StatusCode::PAYLOAD_TOO_LARGE),
            (AppError::UnsupportedMediaType("x".into()), StatusCode::UNSUPPORTED_MEDIA_TYPE),
            (AppError::Llm("x".into()), StatusCode::BAD_GATEWAY),
            (AppError::GitHub("x".into()), StatusCode::BAD_GATEWAY),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_github_not_found_maps_to_404() {
        let err: AppError = GithubError::NotFound("ghost".into()).into();
        assert!(matches!(err, AppError::NotFound(ref m) if m.contains("ghost")));
    }

    #[test]
    fn test_extract_errors_map_by_kind() {
        let err: AppError = ExtractError::Unsupported("image".into()).into();
        assert!(matches!(err, AppError::UnsupportedMediaType(_)));
        let err: AppError = ExtractError::TooLarge { limit_mb: 25 }.into();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
        let err: AppError = ExtractError::NoText.into();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
