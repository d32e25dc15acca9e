//! Gateway configuration model.
//!
//! Loaded once at startup from environment variables (see
//! `lovewall_infra::env`). Subsystems are independently optional: an
//! unconfigured subsystem leaves its section `None` and the corresponding
//! endpoints answer with a configuration error instead of failing at boot.
//!
//! Secrets are wrapped in [`secrecy::SecretString`] so they never appear in
//! `Debug` output or logs.

use std::fmt;
use std::str::FromStr;

use secrecy::SecretString;

/// Complete gateway configuration.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    /// Outbound mail settings for the contact flow.
    pub mail: Option<MailConfig>,
    /// Active AI provider settings for the summarize flow.
    pub summarizer: Option<SummarizerConfig>,
    /// Testimonial datastore settings for the ingestion flow.
    pub store: Option<StoreConfig>,
    /// CORS origin policy for the `/api` routes.
    pub allowed_origins: AllowedOrigins,
}

/// SMTP transport and addressing for the contact flow.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP relay hostname.
    pub smtp_host: String,
    /// Account used to authenticate against the relay.
    pub username: String,
    /// App password or SMTP credential for `username`.
    pub password: SecretString,
    /// Address the operator notification is delivered to.
    pub recipient: String,
    /// Public site URL appended to the confirmation email footer.
    pub site_url: Option<String>,
}

/// Which generative-text backend serves the summarize flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    HuggingFace,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Gemini => write!(f, "gemini"),
            ProviderKind::HuggingFace => write!(f, "huggingface"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "huggingface" | "hf" => Ok(ProviderKind::HuggingFace),
            other => Err(format!("invalid summary provider: '{other}'")),
        }
    }
}

/// Settings for the active summarization provider.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub provider: ProviderKind,
    /// Credential for the active provider.
    pub api_key: SecretString,
    /// Model identifier; each provider supplies its own default.
    pub model: String,
}

/// Testimonial datastore (Supabase-style REST) settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the datastore project.
    pub url: String,
    /// Public (anon) API key sent with every datastore request.
    pub anon_key: SecretString,
}

/// CORS origin policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// `Access-Control-Allow-Origin: *`
    #[default]
    Any,
    /// Explicit allow-list.
    List(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_roundtrip() {
        for kind in [ProviderKind::Gemini, ProviderKind::HuggingFace] {
            let s = kind.to_string();
            let parsed: ProviderKind = s.parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_provider_kind_hf_alias() {
        assert_eq!("hf".parse::<ProviderKind>(), Ok(ProviderKind::HuggingFace));
        assert!("claude".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_secret_not_in_debug_output() {
        let config = SummarizerConfig {
            provider: ProviderKind::Gemini,
            api_key: SecretString::from("super-secret-key"),
            model: "gemini-1.5-flash-latest".to_string(),
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-key"));
    }
}
