//! GeminiProvider -- concrete [`SummaryProvider`] implementation for the
//! Google Generative Language API.
//!
//! Sends a single non-streaming `generateContent` request and defensively
//! walks the candidates -> content -> parts -> text path of the answer.
//! The API key is wrapped in [`secrecy::SecretString`] and sent via the
//! `x-goog-api-key` header rather than a query parameter so it cannot leak
//! into request logs.

pub mod types;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use lovewall_core::summarize::SummaryProvider;
use lovewall_types::error::SummarizeError;

use self::types::{GeminiErrorEnvelope, GeminiRequest, GeminiResponse};
use crate::provider::is_model_warming;

/// Default model when configuration does not name one.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Gemini generative-text provider.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider for the given model.
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
        }
    }

    /// Override the base URL (useful for tests or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

impl SummaryProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, SummarizeError> {
        let body = GeminiRequest::single_turn(prompt);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| SummarizeError::Upstream(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status.as_u16(), &error_body));
        }

        let parsed: GeminiResponse = response
            .json()
            .await
            .map_err(|e| SummarizeError::MalformedResponse(format!("failed to parse response: {e}")))?;

        extract_summary(parsed)
    }
}

/// Map a non-2xx answer to the gateway error taxonomy.
///
/// The upstream reports a still-loading model inside the error message, not
/// via a dedicated status code, so classification inspects the message.
fn classify_failure(status: u16, body: &str) -> SummarizeError {
    let message = serde_json::from_str::<GeminiErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .unwrap_or_else(|| body.to_string());

    if is_model_warming(&message) {
        SummarizeError::TransientUnavailable(message)
    } else {
        SummarizeError::Upstream(format!("HTTP {status}: {message}"))
    }
}

/// Walk candidates -> content -> parts -> text; anything missing at any
/// depth is a malformed response.
fn extract_summary(response: GeminiResponse) -> Result<String, SummarizeError> {
    response
        .candidates
        .and_then(|mut candidates| {
            if candidates.is_empty() {
                None
            } else {
                Some(candidates.remove(0))
            }
        })
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .and_then(|mut parts| if parts.is_empty() { None } else { Some(parts.remove(0)) })
        .and_then(|part| part.text)
        .ok_or_else(|| {
            SummarizeError::MalformedResponse(
                "response missing candidates/content/parts text".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> GeminiResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn extracts_first_candidate_text() {
        let response = parse(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "A punchy summary."}]}},
                {"content": {"parts": [{"text": "Ignored second candidate."}]}}
            ]
        }));
        assert_eq!(extract_summary(response).unwrap(), "A punchy summary.");
    }

    #[test]
    fn missing_candidates_is_malformed() {
        let response = parse(serde_json::json!({}));
        assert!(matches!(
            extract_summary(response),
            Err(SummarizeError::MalformedResponse(_))
        ));
    }

    #[test]
    fn empty_candidate_list_is_malformed() {
        let response = parse(serde_json::json!({"candidates": []}));
        assert!(extract_summary(response).is_err());
    }

    #[test]
    fn candidate_without_content_is_malformed() {
        let response = parse(serde_json::json!({"candidates": [{}]}));
        assert!(extract_summary(response).is_err());
    }

    #[test]
    fn content_without_parts_is_malformed() {
        let response = parse(serde_json::json!({"candidates": [{"content": {}}]}));
        assert!(extract_summary(response).is_err());
    }

    #[test]
    fn part_without_text_is_malformed() {
        let response = parse(serde_json::json!({"candidates": [{"content": {"parts": [{}]}}]}));
        assert!(extract_summary(response).is_err());
    }

    #[test]
    fn warming_message_classifies_as_transient() {
        let body = r#"{"error": {"message": "Model gemini-1.5-flash-latest is loading, please retry"}}"#;
        assert!(matches!(
            classify_failure(503, body),
            SummarizeError::TransientUnavailable(_)
        ));
    }

    #[test]
    fn other_upstream_failures_are_not_retryable() {
        let body = r#"{"error": {"message": "API key not valid. Please pass a valid API key."}}"#;
        let err = classify_failure(400, body);
        match err {
            SummarizeError::Upstream(message) => {
                assert!(message.contains("HTTP 400"));
                assert!(message.contains("API key not valid"));
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_error_body_falls_back_to_raw_text() {
        let err = classify_failure(502, "<html>Bad Gateway</html>");
        assert!(matches!(err, SummarizeError::Upstream(_)));
    }

    #[test]
    fn request_body_embeds_prompt() {
        let body = GeminiRequest::single_turn("summarize this");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json["contents"][0]["parts"][0]["text"],
            "summarize this"
        );
    }
}
