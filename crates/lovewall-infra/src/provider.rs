//! Summary provider factory.
//!
//! Constructs the configured [`SummaryProvider`] backend. The gateway
//! service is generic over one provider type, so the factory returns an
//! enum that dispatches to the concrete implementation; with exactly two
//! backends this stays simpler than an object-safe boxing wrapper.

use lovewall_core::summarize::SummaryProvider;
use lovewall_types::config::{ProviderKind, SummarizerConfig};
use lovewall_types::error::SummarizeError;

use crate::gemini::GeminiProvider;
use crate::huggingface::HuggingFaceProvider;

/// The configured provider backend.
pub enum AnyProvider {
    Gemini(GeminiProvider),
    HuggingFace(HuggingFaceProvider),
}

impl SummaryProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            AnyProvider::Gemini(provider) => provider.name(),
            AnyProvider::HuggingFace(provider) => provider.name(),
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, SummarizeError> {
        match self {
            AnyProvider::Gemini(provider) => provider.generate(prompt).await,
            AnyProvider::HuggingFace(provider) => provider.generate(prompt).await,
        }
    }
}

/// Build the provider named by configuration.
pub fn create_provider(config: &SummarizerConfig) -> AnyProvider {
    match config.provider {
        ProviderKind::Gemini => AnyProvider::Gemini(GeminiProvider::new(
            config.api_key.clone(),
            config.model.clone(),
        )),
        ProviderKind::HuggingFace => AnyProvider::HuggingFace(HuggingFaceProvider::new(
            config.api_key.clone(),
            config.model.clone(),
        )),
    }
}

/// Does an upstream error message indicate the model is still loading?
///
/// Both backends report warm-up inside the message text rather than with a
/// dedicated status code; this is the only condition callers should retry.
pub(crate) fn is_model_warming(message: &str) -> bool {
    let lowered = message.to_lowercase();
    lowered.contains("loading") || lowered.contains("warming up")
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    #[test]
    fn factory_selects_configured_backend() {
        let config = SummarizerConfig {
            provider: ProviderKind::Gemini,
            api_key: SecretString::from("test-key"),
            model: crate::gemini::DEFAULT_MODEL.to_string(),
        };
        assert_eq!(create_provider(&config).name(), "gemini");

        let config = SummarizerConfig {
            provider: ProviderKind::HuggingFace,
            api_key: SecretString::from("test-token"),
            model: crate::huggingface::DEFAULT_MODEL.to_string(),
        };
        assert_eq!(create_provider(&config).name(), "huggingface");
    }

    #[test]
    fn warming_detection_matches_known_messages() {
        assert!(is_model_warming(
            "Model facebook/bart-large-cnn is currently loading"
        ));
        assert!(is_model_warming("the model is warming up, retry shortly"));
        assert!(!is_model_warming("API key not valid"));
        assert!(!is_model_warming("internal server error"));
    }
}
