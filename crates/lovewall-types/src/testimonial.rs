//! Testimonial payloads and the stored record shape.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw testimonial submission payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitTestimonialRequest {
    pub author_name: Option<String>,
    pub author_title: Option<String>,
    pub testimonial_text: Option<String>,
    pub user_id: Option<String>,
}

/// A validated testimonial, ready for ingestion.
///
/// `author_title` is an explicit absent marker when the caller left it out
/// or sent only whitespace; it is never an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestimonial {
    pub author_name: String,
    pub author_title: Option<String>,
    pub testimonial_text: String,
    pub user_id: Uuid,
}

/// The row shape handed to the testimonial store.
///
/// `author_title` serializes as `null` when absent so the stored row always
/// carries the column explicitly. `is_published` is false at creation and
/// can only become true through the out-of-band moderation process; use
/// [`TestimonialRecord::unpublished`] rather than constructing the struct
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestimonialRecord {
    pub author_name: String,
    pub author_title: Option<String>,
    pub testimonial_text: String,
    pub user_id: Uuid,
    pub is_published: bool,
}

impl TestimonialRecord {
    /// Build the moderation-gated row for a new submission.
    pub fn unpublished(new: NewTestimonial) -> Self {
        Self {
            author_name: new.author_name,
            author_title: new.author_title,
            testimonial_text: new.testimonial_text,
            user_id: new.user_id,
            is_published: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpublished_forces_moderation_flag() {
        let new = NewTestimonial {
            author_name: "Jane".to_string(),
            author_title: None,
            testimonial_text: "Great service".to_string(),
            user_id: Uuid::now_v7(),
        };
        let record = TestimonialRecord::unpublished(new);
        assert!(!record.is_published);
    }

    #[test]
    fn absent_title_serializes_as_null() {
        let record = TestimonialRecord {
            author_name: "Jane".to_string(),
            author_title: None,
            testimonial_text: "Great service".to_string(),
            user_id: Uuid::nil(),
            is_published: false,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("author_title").unwrap().is_null());
        assert_eq!(json.get("is_published").unwrap(), false);
    }
}
