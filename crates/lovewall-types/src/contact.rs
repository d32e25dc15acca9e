//! Contact-form payloads.

use serde::Deserialize;

/// Raw contact-form payload as the browser submits it.
///
/// Every field is optional at this stage; the validation layer reports the
/// first missing or blank field by name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A validated contact-form submission.
///
/// Transient: exists only for the duration of one request and is never
/// persisted. All fields are trimmed and non-empty, and `email` has already
/// passed the `local@domain.tld` shape check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}
