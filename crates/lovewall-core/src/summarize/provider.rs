//! SummaryProvider trait definition.
//!
//! The one seam between the summarization gateway and whichever
//! generative-text backend is active. Concrete implementations live in
//! `lovewall-infra`; selection is a configuration concern.

use lovewall_types::error::SummarizeError;

/// A generative-text backend able to answer a single prompt.
///
/// Implementations are responsible for normalizing their upstream's error
/// shapes into [`SummarizeError`]: a credential missing before any network
/// call is `Config`, a model still loading is `TransientUnavailable`, any
/// other non-success answer is `Upstream`, and a response missing expected
/// structure is `MalformedResponse`.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition); the gateway
/// service is generic over this trait, so no object safety is needed.
pub trait SummaryProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini", "huggingface").
    fn name(&self) -> &str;

    /// Submit one prompt and await the raw generated text.
    ///
    /// No streaming, no multi-turn state. The returned text is untrimmed;
    /// output normalization belongs to the gateway service.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, SummarizeError>> + Send;
}
