use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::layout::LayoutError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    /// The model answered, but not in the shape we asked for.
    #[error("LLM response did not match the expected schema: {0}")]
    SchemaMismatch(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::SchemaMismatch(detail) => AppError::SchemaMismatch(detail),
            other => AppError::Llm(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred, please try again".to_string(),
                )
            }
            AppError::SchemaMismatch(detail) => {
                tracing::error!("LLM schema mismatch: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SCHEMA_MISMATCH",
                    "The AI response was malformed, please try again".to_string(),
                )
            }
            AppError::Layout(LayoutError::Input(msg)) => {
                (StatusCode::BAD_REQUEST, "LAYOUT_INPUT_ERROR", msg.clone())
            }
            AppError::Layout(e @ LayoutError::Encoding(_)) => {
                tracing::error!("{e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ENCODING_ERROR",
                    "The document could not be generated, please try again".to_string(),
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
    fn test_layout_input_maps_to_bad_request() {
        let response =
            AppError::Layout(LayoutError::Input("title must not be empty".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_encoding_failure_maps_to_server_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "deflate");
        let response = AppError::Layout(LayoutError::Encoding(io)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_schema_mismatch_is_kept_distinct_from_transport_errors() {
        let mismatch: AppError = LlmError::SchemaMismatch("missing summary".into()).into();
        assert!(matches!(mismatch, AppError::SchemaMismatch(_)));

        let empty: AppError = LlmError::EmptyContent.into();
        assert!(matches!(empty, AppError::Llm(_)));
        assert_eq!(
            AppError::SchemaMismatch("x".into()).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
