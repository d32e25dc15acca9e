//! Testimonial submission handlers.
//!
//! Two deliberately separate code paths with different trust boundaries:
//! the anonymous route trusts a UUID-validated `user_id` from the payload,
//! the bearer route takes the id from the verified token identity and
//! ignores whatever the caller sent.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use lovewall_core::validate::{validate_testimonial, validate_testimonial_for_user};
use lovewall_types::testimonial::SubmitTestimonialRequest;

use crate::http::error::AppError;
use crate::http::extractors::auth::AuthUser;
use crate::state::AppState;

/// Response body for an accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
}

const ACCEPTED: SubmitResponse = SubmitResponse {
    success: true,
    message: "Thank you! Your testimonial was submitted and is awaiting review.",
};

/// POST /api/testimonials/submit - public anonymous-submission mode.
pub async fn submit_public(
    State(state): State<AppState>,
    Json(body): Json<SubmitTestimonialRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let new = validate_testimonial(&body)?;

    let ingest = state
        .ingest
        .as_ref()
        .ok_or(AppError::Config("testimonial store is not configured"))?;

    ingest.submit(new).await?;

    Ok(Json(ACCEPTED))
}

/// POST /api/testimonials - bearer-token mode.
///
/// The verified identity supplies `user_id`; the payload does not need to
/// carry one and is ignored when it does.
pub async fn submit_authenticated(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(body): Json<SubmitTestimonialRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let new = validate_testimonial_for_user(&body, user.id)?;

    let ingest = state
        .ingest
        .as_ref()
        .ok_or(AppError::Config("testimonial store is not configured"))?;

    ingest.submit_authenticated(&user, new).await?;

    Ok(Json(ACCEPTED))
}
