//! Contact-form handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use lovewall_core::validate::validate_contact;
use lovewall_types::contact::ContactRequest;

use crate::http::error::AppError;
use crate::state::AppState;

/// Response body for a delivered contact submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/contact - validate and dispatch the dual-email notification.
///
/// Validation failures return before any send is attempted. The notifier
/// owns the asymmetric failure rule: only the primary (operator) send can
/// fail this request.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let message = validate_contact(&body)?;

    let notifier = state
        .notifier
        .as_ref()
        .ok_or(AppError::Config("mail transport is not configured"))?;

    notifier.notify_contact(&message).await?;

    Ok(Json(ContactResponse {
        success: true,
        message: "Message sent successfully! You should receive a confirmation email shortly.",
    }))
}
