//! Bearer-token authentication extractor.
//!
//! Extracts `Authorization: Bearer <token>` and resolves it to an
//! [`AuthenticatedUser`] by delegating to the datastore's auth
//! verification. Nothing is cached; identity lives for one request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use lovewall_core::ingest::IdentityVerifier;
use lovewall_types::identity::AuthenticatedUser;

use crate::http::error::AppError;
use crate::state::AppState;

/// Verified caller identity. Extracting this enforces bearer auth.
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(parts)?;

        let verifier = state
            .verifier
            .as_ref()
            .ok_or(AppError::Config("identity verification is not configured"))?;

        let user = verifier.verify(&token).await?;
        Ok(AuthUser(user))
    }
}

/// Pull the bearer token out of the Authorization header.
fn extract_bearer_token(parts: &Parts) -> Result<String, AppError> {
    let header = parts.headers.get("authorization").ok_or_else(|| {
        AppError::Unauthorized(
            "Missing Authorization header. Provide 'Authorization: Bearer <token>'.".to_string(),
        )
    })?;

    let value = header.to_str().map_err(|_| {
        AppError::Unauthorized("Invalid Authorization header encoding.".to_string())
    })?;

    let token = value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            AppError::Unauthorized(
                "Authorization header must use the 'Bearer <token>' scheme.".to_string(),
            )
        })?;

    Ok(token.to_string())
}
