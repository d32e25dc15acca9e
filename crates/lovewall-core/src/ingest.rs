//! Testimonial ingestion service.
//!
//! Performs exactly one insert per submission with `is_published` forced to
//! `false`; the record becomes publicly visible only through the
//! out-of-scope moderation process. No retry, no read-after-write: success
//! is "the insert call did not error".
//!
//! Two authentication modes coexist and stay distinct code paths end to
//! end. The anonymous path trusts a caller-supplied, UUID-validated
//! `user_id`; the bearer path discards any caller-supplied id in favor of
//! the identity the verifier resolved from the token.

use lovewall_types::error::IngestError;
use lovewall_types::identity::AuthenticatedUser;
use lovewall_types::testimonial::{NewTestimonial, TestimonialRecord};

/// Append-only testimonial persistence seam.
pub trait TestimonialStore: Send + Sync {
    /// Insert one row. Implementations must not retry; any store-level
    /// failure surfaces with the store's message attached.
    fn insert(
        &self,
        record: &TestimonialRecord,
    ) -> impl std::future::Future<Output = Result<(), IngestError>> + Send;
}

/// Bearer-token identity resolution seam, delegated to the datastore's auth
/// endpoint. Verification failure or an unresolvable identity is
/// [`IngestError::Unauthorized`].
pub trait IdentityVerifier: Send + Sync {
    fn verify(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<AuthenticatedUser, IngestError>> + Send;
}

/// Ingestion service over a concrete store.
pub struct IngestService<S: TestimonialStore> {
    store: S,
}

impl<S: TestimonialStore> IngestService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Anonymous-submission mode: the UUID-shaped `user_id` in the payload
    /// has already passed validation and is trusted as-is.
    pub async fn submit(&self, new: NewTestimonial) -> Result<(), IngestError> {
        let record = TestimonialRecord::unpublished(new);
        tracing::info!(user_id = %record.user_id, "inserting testimonial (anonymous mode)");
        self.store.insert(&record).await
    }

    /// Bearer-token mode: the verified identity supplies the `user_id`,
    /// overriding whatever the caller sent.
    pub async fn submit_authenticated(
        &self,
        user: &AuthenticatedUser,
        new: NewTestimonial,
    ) -> Result<(), IngestError> {
        let record = TestimonialRecord::unpublished(NewTestimonial {
            user_id: user.id,
            ..new
        });
        tracing::info!(user_id = %user.id, "inserting testimonial (bearer mode)");
        self.store.insert(&record).await
    }
}
