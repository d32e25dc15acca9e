//! HuggingFaceProvider -- [`SummaryProvider`] over the HF Inference API.
//!
//! The Inference API keeps models cold until first use and answers 503 with
//! a "currently loading" message while one warms up; that behavior is the
//! origin of the gateway's `TransientUnavailable` error. Success bodies are
//! an array of generations carrying either `summary_text` (summarization
//! pipelines) or `generated_text` (text-generation pipelines).

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use lovewall_core::summarize::SummaryProvider;
use lovewall_types::error::SummarizeError;

use crate::provider::is_model_warming;

/// Default model when configuration does not name one.
pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

/// Hugging Face Inference API provider.
pub struct HuggingFaceProvider {
    client: reqwest::Client,
    api_token: SecretString,
    base_url: String,
    model: String,
}

/// One generation in a success response.
#[derive(Debug, Clone, Deserialize)]
struct HfGeneration {
    #[serde(default)]
    summary_text: Option<String>,
    #[serde(default)]
    generated_text: Option<String>,
}

/// Error body shape, e.g. `{"error": "Model X is currently loading",
/// "estimated_time": 20.0}`.
#[derive(Debug, Clone, Default, Deserialize)]
struct HfErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl HuggingFaceProvider {
    pub fn new(api_token: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_token,
            base_url: "https://api-inference.huggingface.co".to_string(),
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
        format!("{}/models/{}", self.base_url, self.model)
    }
}

impl SummaryProvider for HuggingFaceProvider {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn generate(&self, prompt: &str) -> Result<String, SummarizeError> {
        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_token.expose_secret())
            .json(&serde_json::json!({ "inputs": prompt }))
            .send()
            .await
            .map_err(|e| SummarizeError::Upstream(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status.as_u16(), &error_body));
        }

        let generations: Vec<HfGeneration> = response
            .json()
            .await
            .map_err(|e| SummarizeError::MalformedResponse(format!("failed to parse response: {e}")))?;

        extract_generation(generations)
    }
}

fn classify_failure(status: u16, body: &str) -> SummarizeError {
    let message = serde_json::from_str::<HfErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .unwrap_or_else(|| body.to_string());

    if is_model_warming(&message) {
        SummarizeError::TransientUnavailable(message)
    } else {
        SummarizeError::Upstream(format!("HTTP {status}: {message}"))
    }
}

fn extract_generation(generations: Vec<HfGeneration>) -> Result<String, SummarizeError> {
    generations
        .into_iter()
        .next()
        .and_then(|generation| generation.summary_text.or(generation.generated_text))
        .ok_or_else(|| {
            SummarizeError::MalformedResponse(
                "response missing summary_text/generated_text".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_body_classifies_as_transient() {
        let body =
            r#"{"error": "Model facebook/bart-large-cnn is currently loading", "estimated_time": 20.0}"#;
        assert!(matches!(
            classify_failure(503, body),
            SummarizeError::TransientUnavailable(_)
        ));
    }

    #[test]
    fn auth_failure_is_upstream() {
        let body = r#"{"error": "Authorization header is correct, but the token seems invalid"}"#;
        assert!(matches!(
            classify_failure(401, body),
            SummarizeError::Upstream(_)
        ));
    }

    #[test]
    fn summary_text_preferred_over_generated_text() {
        let generations: Vec<HfGeneration> = serde_json::from_str(
            r#"[{"summary_text": "Short and sweet.", "generated_text": "Longer alternative."}]"#,
        )
        .unwrap();
        assert_eq!(extract_generation(generations).unwrap(), "Short and sweet.");
    }

    #[test]
    fn generated_text_used_as_fallback() {
        let generations: Vec<HfGeneration> =
            serde_json::from_str(r#"[{"generated_text": "From a text-generation pipeline."}]"#)
                .unwrap();
        assert_eq!(
            extract_generation(generations).unwrap(),
            "From a text-generation pipeline."
        );
    }

    #[test]
    fn empty_generation_list_is_malformed() {
        assert!(matches!(
            extract_generation(Vec::new()),
            Err(SummarizeError::MalformedResponse(_))
        ));
    }
}
