//! Application state wiring all services together.
//!
//! The composition root: builds each adapter client exactly once from
//! [`GatewayConfig`] and pins the generic core services to the concrete
//! infra implementations. A subsystem whose configuration is incomplete
//! stays `None`; its endpoints answer with a configuration error per
//! request, before any outbound call, instead of failing the whole boot.

use std::sync::Arc;

use lovewall_core::ingest::IngestService;
use lovewall_core::notify::ContactNotifier;
use lovewall_core::summarize::SummarizeService;
use lovewall_infra::provider::{create_provider, AnyProvider};
use lovewall_infra::smtp::SmtpMailer;
use lovewall_infra::supabase::SupabaseClient;
use lovewall_types::config::{AllowedOrigins, GatewayConfig};

/// Concrete type aliases for the service generics pinned to infra
/// implementations.
pub type ConcreteSummarizer = SummarizeService<AnyProvider>;
pub type ConcreteNotifier = ContactNotifier<SmtpMailer>;
pub type ConcreteIngest = IngestService<SupabaseClient>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Option<Arc<ConcreteSummarizer>>,
    pub notifier: Option<Arc<ConcreteNotifier>>,
    pub ingest: Option<Arc<ConcreteIngest>>,
    /// Bearer-token verification, delegated to the datastore's auth
    /// surface. Shares configuration with `ingest` but is a separate
    /// client so the extractor and the store stay independent.
    pub verifier: Option<Arc<SupabaseClient>>,
    pub allowed_origins: AllowedOrigins,
}

impl AppState {
    /// Wire services from loaded configuration.
    pub fn from_config(config: &GatewayConfig) -> Self {
        let summarizer = config
            .summarizer
            .as_ref()
            .map(|summarizer| Arc::new(SummarizeService::new(create_provider(summarizer))));

        let notifier = config.mail.as_ref().and_then(|mail| {
            match SmtpMailer::new(mail) {
                Ok(mailer) => Some(Arc::new(ContactNotifier::new(
                    mailer,
                    mail.recipient.clone(),
                    mail.site_url.clone(),
                ))),
                Err(err) => {
                    tracing::warn!(error = %err, "mail transport unavailable");
                    None
                }
            }
        });

        let ingest = config
            .store
            .as_ref()
            .map(|store| Arc::new(IngestService::new(SupabaseClient::new(store))));

        let verifier = config
            .store
            .as_ref()
            .map(|store| Arc::new(SupabaseClient::new(store)));

        Self {
            summarizer,
            notifier,
            ingest,
            verifier,
            allowed_origins: config.allowed_origins.clone(),
        }
    }
}
