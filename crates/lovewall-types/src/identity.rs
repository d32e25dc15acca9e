//! Caller identity resolved from a bearer token.

use serde::Deserialize;
use uuid::Uuid;

/// Identity resolved from a bearer token for the duration of one request.
///
/// Produced by delegating to the datastore's auth verification endpoint.
/// Never cached or persisted by the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}
