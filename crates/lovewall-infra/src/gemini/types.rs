//! Gemini generateContent API types.
//!
//! Wire structures for the Google Generative Language API. Every field of
//! the response side is optional: the gateway must treat a missing field at
//! any depth as a malformed response, never as a crash, so nothing here
//! assumes the upstream honors its own schema.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

impl GeminiRequest {
    /// A single-turn request carrying one text part.
    pub fn single_turn(text: &str) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: Some(vec![GeminiPart {
                    text: Some(text.to_string()),
                }]),
            }],
        }
    }
}

/// One content entry: a list of parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<GeminiPart>>,
}

/// One part of a content entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Success response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Option<Vec<GeminiCandidate>>,
}

/// One candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
}

/// Error envelope returned on non-2xx answers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeminiErrorEnvelope {
    #[serde(default)]
    pub error: Option<GeminiErrorBody>,
}

/// The error object inside the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
