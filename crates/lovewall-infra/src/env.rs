//! Environment-variable configuration loader.
//!
//! Reads `LOVEWALL_*` variables (with conventional unprefixed fallbacks for
//! the third-party credentials) into [`GatewayConfig`]. Subsystems with
//! incomplete configuration load as `None` with a warning instead of
//! failing the boot; the affected endpoints answer with a configuration
//! error until the operator fixes the environment.

use secrecy::SecretString;

use lovewall_types::config::{
    AllowedOrigins, GatewayConfig, MailConfig, ProviderKind, StoreConfig, SummarizerConfig,
};

/// Load gateway configuration from the process environment.
pub fn load_config() -> GatewayConfig {
    GatewayConfig {
        mail: load_mail(),
        summarizer: load_summarizer(),
        store: load_store(),
        allowed_origins: parse_origins(env_var("LOVEWALL_ALLOWED_ORIGINS")),
    }
}

fn load_mail() -> Option<MailConfig> {
    let username = env_var("LOVEWALL_MAIL_USER");
    let password = env_var("LOVEWALL_MAIL_PASSWORD");
    let recipient = env_var("LOVEWALL_MAIL_RECIPIENT");

    match (username, password, recipient) {
        (Some(username), Some(password), Some(recipient)) => Some(MailConfig {
            smtp_host: env_var("LOVEWALL_SMTP_HOST")
                .unwrap_or_else(|| "smtp.gmail.com".to_string()),
            username,
            password: SecretString::from(password),
            recipient,
            site_url: env_var("LOVEWALL_SITE_URL"),
        }),
        _ => {
            tracing::warn!(
                "mail disabled: LOVEWALL_MAIL_USER, LOVEWALL_MAIL_PASSWORD, and \
                 LOVEWALL_MAIL_RECIPIENT must all be set"
            );
            None
        }
    }
}

fn load_summarizer() -> Option<SummarizerConfig> {
    let provider = match env_var("LOVEWALL_SUMMARY_PROVIDER") {
        Some(raw) => match raw.parse::<ProviderKind>() {
            Ok(kind) => kind,
            Err(err) => {
                tracing::warn!("{err}, falling back to gemini");
                ProviderKind::Gemini
            }
        },
        None => ProviderKind::Gemini,
    };

    let (key, default_model) = match provider {
        ProviderKind::Gemini => (
            env_first(&["LOVEWALL_GEMINI_API_KEY", "GEMINI_API_KEY"]),
            crate::gemini::DEFAULT_MODEL,
        ),
        ProviderKind::HuggingFace => (
            env_first(&["LOVEWALL_HF_API_TOKEN", "HF_API_TOKEN"]),
            crate::huggingface::DEFAULT_MODEL,
        ),
    };

    let Some(key) = key else {
        tracing::warn!(provider = %provider, "summarizer disabled: provider credential not set");
        return None;
    };

    Some(SummarizerConfig {
        provider,
        api_key: SecretString::from(key),
        model: env_var("LOVEWALL_SUMMARY_MODEL").unwrap_or_else(|| default_model.to_string()),
    })
}

fn load_store() -> Option<StoreConfig> {
    let url = env_first(&["LOVEWALL_SUPABASE_URL", "SUPABASE_URL"]);
    let anon_key = env_first(&["LOVEWALL_SUPABASE_ANON_KEY", "SUPABASE_ANON_KEY"]);

    match (url, anon_key) {
        (Some(url), Some(anon_key)) => Some(StoreConfig {
            url,
            anon_key: SecretString::from(anon_key),
        }),
        _ => {
            tracing::warn!("testimonial store disabled: datastore URL or anon key not set");
            None
        }
    }
}

/// Parse a comma-separated origin list; `*`, blank, or unset means any.
fn parse_origins(raw: Option<String>) -> AllowedOrigins {
    match raw {
        Some(value) if value.trim() != "*" => {
            let origins: Vec<String> = value
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect();
            if origins.is_empty() {
                AllowedOrigins::Any
            } else {
                AllowedOrigins::List(origins)
            }
        }
        _ => AllowedOrigins::Any,
    }
}

/// Read one env var, treating unset, blank, and non-Unicode values as
/// absent. Secrets must be valid strings; anything else is not usable.
fn env_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}

/// First present variable from a prefixed-then-fallback name list.
fn env_first(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| env_var(name))
}
