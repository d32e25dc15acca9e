//! Pure payload validation.
//!
//! Every function here is synchronous, deterministic, and side-effect free:
//! given a raw payload it returns either a normalized record or a
//! [`ValidationError`] naming the first violated constraint. Presence and
//! non-blank checks run before format checks.

use uuid::Uuid;

use lovewall_types::contact::{ContactMessage, ContactRequest};
use lovewall_types::error::ValidationError;
use lovewall_types::summary::SummarizeRequest;
use lovewall_types::testimonial::{NewTestimonial, SubmitTestimonialRequest};

/// Minimum trimmed length accepted by the summarize endpoint.
pub const MIN_SUMMARIZE_CHARS: usize = 10;

/// Validate a contact-form payload.
///
/// Checks name, email, and message for presence and non-blankness (in that
/// order), then the email shape. Returned fields are trimmed.
pub fn validate_contact(req: &ContactRequest) -> Result<ContactMessage, ValidationError> {
    let name = require_text("name", req.name.as_deref())?;
    let email = require_text("email", req.email.as_deref())?;
    let message = require_text("message", req.message.as_deref())?;

    if !is_plausible_email(&email) {
        return Err(ValidationError::new(
            "email",
            "must look like name@example.com",
        ));
    }

    Ok(ContactMessage {
        name,
        email,
        message,
    })
}

/// Validate a summarize payload, returning the text to summarize verbatim.
///
/// Rejects a missing `text`, a non-string `text`, and anything shorter than
/// [`MIN_SUMMARIZE_CHARS`] once trimmed.
pub fn validate_summarize(req: &SummarizeRequest) -> Result<String, ValidationError> {
    let value = req
        .text
        .as_ref()
        .ok_or_else(|| ValidationError::new("text", "is required"))?;

    let text = value
        .as_str()
        .ok_or_else(|| ValidationError::new("text", "must be a string"))?;

    if text.trim().chars().count() < MIN_SUMMARIZE_CHARS {
        return Err(ValidationError::new(
            "text",
            format!("must be at least {MIN_SUMMARIZE_CHARS} characters"),
        ));
    }

    Ok(text.to_string())
}

/// Validate a testimonial submission payload (anonymous-submission mode).
///
/// `user_id` must be a canonical hyphenated RFC 4122 UUID (version 1-5,
/// variant 8/9/a/b). A blank `author_title` normalizes to `None`.
pub fn validate_testimonial(
    req: &SubmitTestimonialRequest,
) -> Result<NewTestimonial, ValidationError> {
    let (author_name, author_title, testimonial_text) = testimonial_fields(req)?;
    let raw_user_id = require_text("user_id", req.user_id.as_deref())?;

    let user_id = parse_canonical_uuid(&raw_user_id)
        .ok_or_else(|| ValidationError::new("user_id", "must be a canonical UUID"))?;

    Ok(NewTestimonial {
        author_name,
        author_title,
        testimonial_text,
        user_id,
    })
}

/// Validate a testimonial submission whose `user_id` was already resolved
/// from a verified bearer identity (bearer-token mode).
///
/// Any caller-supplied `user_id` in the payload is ignored; the two modes
/// have different trust boundaries and stay separate paths.
pub fn validate_testimonial_for_user(
    req: &SubmitTestimonialRequest,
    user_id: Uuid,
) -> Result<NewTestimonial, ValidationError> {
    let (author_name, author_title, testimonial_text) = testimonial_fields(req)?;

    Ok(NewTestimonial {
        author_name,
        author_title,
        testimonial_text,
        user_id,
    })
}

/// The fields shared by both submission modes, in reporting order.
fn testimonial_fields(
    req: &SubmitTestimonialRequest,
) -> Result<(String, Option<String>, String), ValidationError> {
    let author_name = require_text("author_name", req.author_name.as_deref())?;
    let testimonial_text = require_text("testimonial_text", req.testimonial_text.as_deref())?;

    let author_title = req
        .author_title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(String::from);

    Ok((author_name, author_title, testimonial_text))
}

/// Presence + non-blank check. Returns the trimmed value.
fn require_text(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ValidationError::new(field, "is required")),
    }
}

/// Minimal `local@domain.tld` shape check.
///
/// At least one non-whitespace, non-`@` character before the `@`, a domain
/// run, a dot, and a TLD run. Deliberately loose beyond that; deliverability
/// is the mail transport's problem.
fn is_plausible_email(value: &str) -> bool {
    let clean =
        |part: &str| !part.is_empty() && !part.chars().any(|c| c == '@' || c.is_whitespace());

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    clean(local) && clean(host) && clean(tld)
}

/// Parse a UUID only if it is in canonical hyphenated form with an RFC 4122
/// variant and a version nibble between 1 and 5.
fn parse_canonical_uuid(value: &str) -> Option<Uuid> {
    let parsed = Uuid::parse_str(value).ok()?;

    // Uuid::parse_str also accepts simple (un-hyphenated) and urn forms;
    // re-encoding and comparing pins the canonical 8-4-4-4-12 layout.
    if !parsed.hyphenated().to_string().eq_ignore_ascii_case(value) {
        return None;
    }

    if parsed.get_variant() != uuid::Variant::RFC4122 {
        return None;
    }

    match parsed.get_version_num() {
        1..=5 => Some(parsed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn contact_accepts_valid_payload() {
        let req = contact("  Jane  ", "jane@example.com", "Hello there");
        let msg = validate_contact(&req).unwrap();
        assert_eq!(msg.name, "Jane");
        assert_eq!(msg.email, "jane@example.com");
        assert_eq!(msg.message, "Hello there");
    }

    #[test]
    fn contact_reports_first_missing_field() {
        let err = validate_contact(&ContactRequest::default()).unwrap_err();
        assert_eq!(err.field, "name");

        let req = ContactRequest {
            name: Some("Jane".to_string()),
            email: Some("   ".to_string()),
            message: None,
        };
        assert_eq!(validate_contact(&req).unwrap_err().field, "email");
    }

    #[test]
    fn contact_blank_message_rejected() {
        let req = contact("Jane", "jane@example.com", "   \n ");
        assert_eq!(validate_contact(&req).unwrap_err().field, "message");
    }

    #[test]
    fn contact_presence_checked_before_email_format() {
        // Bad email AND missing message: the missing field wins.
        let req = ContactRequest {
            name: Some("Jane".to_string()),
            email: Some("not-an-email".to_string()),
            message: None,
        };
        assert_eq!(validate_contact(&req).unwrap_err().field, "message");
    }

    #[test]
    fn contact_rejects_malformed_emails() {
        for bad in [
            "not-an-email",
            "missing-domain@",
            "@missing-local.com",
            "no-tld@example",
            "two@@example.com",
            "spaces in@example.com",
            "trailing-dot@example.",
            "a@b@c.com",
        ] {
            let req = contact("Jane", bad, "Hello there");
            let err = validate_contact(&req).unwrap_err();
            assert_eq!(err.field, "email", "expected rejection for {bad:?}");
        }
    }

    #[test]
    fn contact_accepts_subdomain_email() {
        let req = contact("Jane", "jane@mail.example.co.uk", "Hello there");
        assert!(validate_contact(&req).is_ok());
    }

    #[test]
    fn summarize_requires_text() {
        let err = validate_summarize(&SummarizeRequest::default()).unwrap_err();
        assert_eq!(err.field, "text");
        assert!(err.reason.contains("required"));
    }

    #[test]
    fn summarize_rejects_non_string_text() {
        let req = SummarizeRequest {
            text: Some(serde_json::json!(42)),
        };
        let err = validate_summarize(&req).unwrap_err();
        assert!(err.reason.contains("string"));
    }

    #[test]
    fn summarize_rejects_short_text() {
        let req = SummarizeRequest {
            text: Some(serde_json::json!("  too shor  ")),
        };
        assert!(validate_summarize(&req).is_err());
    }

    #[test]
    fn summarize_returns_text_verbatim() {
        let req = SummarizeRequest {
            text: Some(serde_json::json!("  a perfectly long testimonial  ")),
        };
        // Validated on trimmed length, returned untouched.
        assert_eq!(
            validate_summarize(&req).unwrap(),
            "  a perfectly long testimonial  "
        );
    }

    fn submission(user_id: &str) -> SubmitTestimonialRequest {
        SubmitTestimonialRequest {
            author_name: Some("Jane".to_string()),
            author_title: None,
            testimonial_text: Some("Great service".to_string()),
            user_id: Some(user_id.to_string()),
        }
    }

    #[test]
    fn testimonial_accepts_valid_v4_uuid() {
        let new = validate_testimonial(&submission("9b2495e4-7c3f-4d1a-8a2e-3f65c3f8a111")).unwrap();
        assert_eq!(new.author_name, "Jane");
        assert_eq!(new.author_title, None);
    }

    #[test]
    fn testimonial_rejects_non_uuid() {
        let err = validate_testimonial(&submission("not-a-uuid")).unwrap_err();
        assert_eq!(err.field, "user_id");
    }

    #[test]
    fn testimonial_rejects_unhyphenated_uuid() {
        let err =
            validate_testimonial(&submission("9b2495e47c3f4d1a8a2e3f65c3f8a111")).unwrap_err();
        assert_eq!(err.field, "user_id");
    }

    #[test]
    fn testimonial_rejects_bad_version_nibble() {
        // Version nibble 0 and 7 fall outside 1-5.
        for bad in [
            "9b2495e4-7c3f-0d1a-8a2e-3f65c3f8a111",
            "9b2495e4-7c3f-7d1a-8a2e-3f65c3f8a111",
        ] {
            assert!(validate_testimonial(&submission(bad)).is_err(), "{bad}");
        }
    }

    #[test]
    fn testimonial_rejects_bad_variant_nibble() {
        // Variant nibble must be 8, 9, a, or b.
        let err =
            validate_testimonial(&submission("9b2495e4-7c3f-4d1a-0a2e-3f65c3f8a111")).unwrap_err();
        assert_eq!(err.field, "user_id");
    }

    #[test]
    fn testimonial_blank_title_normalizes_to_none() {
        let mut req = submission("9b2495e4-7c3f-4d1a-8a2e-3f65c3f8a111");
        req.author_title = Some("   ".to_string());
        let new = validate_testimonial(&req).unwrap();
        assert_eq!(new.author_title, None);

        req.author_title = Some("  CTO  ".to_string());
        let new = validate_testimonial(&req).unwrap();
        assert_eq!(new.author_title.as_deref(), Some("CTO"));
    }

    #[test]
    fn bearer_mode_ignores_payload_user_id() {
        let mut req = submission("not-a-uuid");
        req.author_title = Some("CTO".to_string());
        let token_id = Uuid::now_v7();

        // The payload's unusable user_id is irrelevant on this path.
        let new = validate_testimonial_for_user(&req, token_id).unwrap();
        assert_eq!(new.user_id, token_id);
        assert_eq!(new.author_title.as_deref(), Some("CTO"));
    }

    #[test]
    fn testimonial_missing_fields_reported_in_order() {
        let err = validate_testimonial(&SubmitTestimonialRequest::default()).unwrap_err();
        assert_eq!(err.field, "author_name");

        let req = SubmitTestimonialRequest {
            author_name: Some("Jane".to_string()),
            ..Default::default()
        };
        assert_eq!(
            validate_testimonial(&req).unwrap_err().field,
            "testimonial_text"
        );
    }
}
