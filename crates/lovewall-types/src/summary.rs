//! Summarization payloads.

use serde::{Deserialize, Serialize};

/// Raw summarize payload.
///
/// `text` is kept as a raw JSON value so the validation layer can
/// distinguish "missing" from "present but not a string" instead of letting
/// deserialization reject the whole body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarizeRequest {
    pub text: Option<serde_json::Value>,
}

/// A summary produced by the AI gateway.
///
/// Never persisted; returned directly to the caller. The gateway guarantees
/// `text` is trimmed and non-empty -- an unusable upstream result surfaces
/// as an error, never as an empty success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub text: String,
}
