//! Application error type mapping to HTTP status codes.
//!
//! The one choke point where downstream failures are logged with full
//! detail and translated into minimal safe messages. Raw provider, store,
//! and transport error payloads never reach the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use lovewall_types::error::{IngestError, NotifyError, SummarizeError, ValidationError};

/// Application-level error that maps to an HTTP response.
#[derive(Debug)]
pub enum AppError {
    /// Caller input malformed; user-correctable.
    Validation(ValidationError),
    /// Missing or invalid credential.
    Unauthorized(String),
    /// Server misconfiguration detected before any outbound call.
    Config(&'static str),
    /// Summarization gateway failure.
    Summarize(SummarizeError),
    /// Notification dispatcher failure.
    Notify(NotifyError),
    /// Ingestion failure.
    Ingest(IngestError),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<SummarizeError> for AppError {
    fn from(e: SummarizeError) -> Self {
        AppError::Summarize(e)
    }
}

impl From<NotifyError> for AppError {
    fn from(e: NotifyError) -> Self {
        AppError::Notify(e)
    }
}

impl From<IngestError> for AppError {
    fn from(e: IngestError) -> Self {
        AppError::Ingest(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                err.to_string(),
            ),
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            AppError::Config(detail) => {
                tracing::error!(%detail, "request failed on missing configuration");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    "The server is not configured for this operation.".to_string(),
                )
            }
            AppError::Summarize(SummarizeError::Config(detail)) => {
                tracing::error!(%detail, "summarizer misconfigured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    "The server is not configured for this operation.".to_string(),
                )
            }
            AppError::Summarize(SummarizeError::TransientUnavailable(detail)) => {
                tracing::warn!(%detail, "summary model warming up");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "MODEL_WARMING_UP",
                    "The AI model is warming up. Please retry in a few seconds.".to_string(),
                )
            }
            AppError::Summarize(err) => {
                tracing::error!(error = %err, "summarization failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SUMMARIZE_FAILED",
                    "Failed to generate a summary. Please try again later.".to_string(),
                )
            }
            AppError::Notify(NotifyError::Config(detail)) => {
                tracing::error!(%detail, "mail transport misconfigured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    "The server is not configured for this operation.".to_string(),
                )
            }
            AppError::Notify(NotifyError::Delivery(detail)) => {
                tracing::error!(%detail, "notification delivery failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DELIVERY_ERROR",
                    "Failed to send message. Please try again later.".to_string(),
                )
            }
            AppError::Ingest(IngestError::Unauthorized(detail)) => {
                tracing::debug!(%detail, "bearer verification failed");
                (
                    StatusCode::UNAUTHORIZED,
                    "UNAUTHORIZED",
                    "Invalid or missing bearer token.".to_string(),
                )
            }
            AppError::Ingest(IngestError::Store(detail)) => {
                tracing::error!(%detail, "testimonial insert failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "Failed to save your testimonial. Please try again later.".to_string(),
                )
            }
        };

        let body = json!({
            "error": {
                "code": code,
                "message": message,
            }
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
