//! Per-component error enums.
//!
//! Each coordination service has its own error type; the api crate folds
//! them into HTTP status codes. Messages here are safe to log verbatim but
//! are translated to generic text before reaching a client.

use thiserror::Error;

/// A caller-correctable input failure, naming the first violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid `{field}`: {reason}")]
pub struct ValidationError {
    /// The payload field that failed.
    pub field: &'static str,
    /// Why it failed.
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors from the AI summarization gateway.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// A required credential or setting for the active provider is absent.
    /// Raised before any network call is made.
    #[error("summarizer configuration error: {0}")]
    Config(String),

    /// The provider answered with a non-retryable error.
    #[error("upstream provider error: {0}")]
    Upstream(String),

    /// The underlying model is still loading or warming up. The only
    /// condition callers should retry.
    #[error("model not ready: {0}")]
    TransientUnavailable(String),

    /// The provider response was missing an expected field, or the
    /// extracted summary was empty after trimming.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Errors from the contact notification dispatcher.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The mail transport is missing required configuration.
    #[error("mail configuration error: {0}")]
    Config(String),

    /// The primary notification send failed. The confirmation send never
    /// produces this; its failure is logged and swallowed.
    #[error("mail delivery failed: {0}")]
    Delivery(String),
}

/// Errors from the testimonial ingestion service.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Bearer token missing, malformed, or rejected by the identity
    /// verifier.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The datastore insert failed; carries the store's message.
    #[error("datastore error: {0}")]
    Store(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("email", "must look like name@example.com");
        assert_eq!(
            err.to_string(),
            "invalid `email`: must look like name@example.com"
        );
    }

    #[test]
    fn test_summarize_error_display() {
        let err = SummarizeError::TransientUnavailable("model is loading".to_string());
        assert!(err.to_string().contains("model is loading"));
    }

    #[test]
    fn test_ingest_error_display() {
        let err = IngestError::Store("duplicate key".to_string());
        assert_eq!(err.to_string(), "datastore error: duplicate key");
    }
}
