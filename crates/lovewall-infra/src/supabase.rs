//! SupabaseClient -- datastore REST adapter.
//!
//! Implements both datastore-facing seams over one HTTP client:
//! [`TestimonialStore`] against the PostgREST surface
//! (`/rest/v1/testimonials`) and [`IdentityVerifier`] against the auth
//! surface (`/auth/v1/user`). The gateway consumes the datastore purely
//! through this insert/verify contract; schema, indexing, and row-level
//! security live on the other side of it.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use lovewall_core::ingest::{IdentityVerifier, TestimonialStore};
use lovewall_types::config::StoreConfig;
use lovewall_types::error::IngestError;
use lovewall_types::identity::AuthenticatedUser;
use lovewall_types::testimonial::TestimonialRecord;

/// REST client for the testimonial datastore.
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: SecretString,
}

impl SupabaseClient {
    pub fn new(config: &StoreConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl TestimonialStore for SupabaseClient {
    /// One POST, no retry. `Prefer: return=minimal` skips the read-back;
    /// success is the insert call not erroring.
    async fn insert(&self, record: &TestimonialRecord) -> Result<(), IngestError> {
        let response = self
            .client
            .post(self.endpoint("/rest/v1/testimonials"))
            .header("apikey", self.anon_key.expose_secret())
            .bearer_auth(self.anon_key.expose_secret())
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| IngestError::Store(format!("datastore request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body = %body, "testimonial insert rejected");
            return Err(IngestError::Store(format!("HTTP {status}: {body}")));
        }

        Ok(())
    }
}

impl IdentityVerifier for SupabaseClient {
    /// Delegate bearer-token verification to the datastore's auth endpoint.
    /// Any failure to resolve an identity is `Unauthorized`.
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, IngestError> {
        let response = self
            .client
            .get(self.endpoint("/auth/v1/user"))
            .header("apikey", self.anon_key.expose_secret())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| IngestError::Unauthorized(format!("verification failed: {e}")))?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "bearer token rejected by auth service");
            return Err(IngestError::Unauthorized("token rejected".to_string()));
        }

        response.json::<AuthenticatedUser>().await.map_err(|_| {
            IngestError::Unauthorized("identity response missing a resolvable user".to_string())
        })
    }
}
