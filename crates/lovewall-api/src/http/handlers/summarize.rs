//! Summarization handlers.
//!
//! The public route serves the plain summarizer form; the authenticated
//! variant serves the signed-in testimonial wall and differs only in
//! requiring a verified bearer identity.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use lovewall_core::validate::validate_summarize;
use lovewall_types::summary::SummarizeRequest;

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::state::AppState;

/// Response body carrying the generated summary.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// POST /api/summarize - summarize testimonial text.
pub async fn summarize(
    State(state): State<AppState>,
    Json(body): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    run_summarize(&state, &body).await
}

/// POST /api/testimonials/summarize - bearer-authenticated variant.
pub async fn summarize_authenticated(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(body): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    run_summarize(&state, &body).await
}

async fn run_summarize(
    state: &AppState,
    body: &SummarizeRequest,
) -> Result<Json<SummarizeResponse>, AppError> {
    let text = validate_summarize(body)?;

    let summarizer = state
        .summarizer
        .as_ref()
        .ok_or(AppError::Config("summary provider is not configured"))?;

    let summary = summarizer.summarize(&text).await?;

    Ok(Json(SummarizeResponse {
        summary: summary.text,
    }))
}
