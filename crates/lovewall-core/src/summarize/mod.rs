//! AI summarization gateway.
//!
//! Wraps the active [`SummaryProvider`] behind a single
//! `summarize(text) -> Summary` contract: build the fixed prompt, await one
//! synchronous upstream response, and normalize the output. Absence of a
//! usable summary is always an error, never an empty success.

pub mod provider;

pub use provider::SummaryProvider;

use lovewall_types::error::SummarizeError;
use lovewall_types::summary::Summary;

/// Build the fixed instructional prompt, embedding the input verbatim.
pub fn wall_of_love_prompt(text: &str) -> String {
    format!(
        "You are a marketing assistant. Summarize the following customer \
         testimonial into a single, punchy, and positive sentence suitable \
         for a website's 'Wall of Love'. Focus on the core benefit or \
         emotion. Do not add any extra text or quotation marks, just the \
         summarized sentence. Testimonial: \"{text}\""
    )
}

/// The summarization gateway service.
pub struct SummarizeService<P: SummaryProvider> {
    provider: P,
}

impl<P: SummaryProvider> SummarizeService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Summarize one piece of testimonial text.
    ///
    /// The extracted summary is trimmed; an empty result after trimming is
    /// promoted to [`SummarizeError::MalformedResponse`].
    pub async fn summarize(&self, text: &str) -> Result<Summary, SummarizeError> {
        let prompt = wall_of_love_prompt(text);

        tracing::debug!(provider = %self.provider.name(), "requesting summary");
        let raw = self.provider.generate(&prompt).await?;

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SummarizeError::MalformedResponse(
                "provider returned an empty summary".to_string(),
            ));
        }

        Ok(Summary {
            text: trimmed.to_string(),
        })
    }
}
