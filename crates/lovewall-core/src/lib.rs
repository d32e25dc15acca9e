//! Business rules for the Lovewall gateway.
//!
//! Three coordination services with real failure semantics, plus the pure
//! validation layer in front of them:
//!
//! - [`summarize`]: AI summarization behind the [`summarize::SummaryProvider`]
//!   trait, normalizing heterogeneous upstream failures.
//! - [`notify`]: dual outbound email with asymmetric partial-failure
//!   tolerance.
//! - [`ingest`]: append-only, moderation-gated testimonial writes.
//!
//! Services are generic over the adapter traits they consume so the api
//! crate can pin them to concrete infra implementations while tests supply
//! doubles. This crate never depends on `lovewall-infra`.

pub mod ingest;
pub mod notify;
pub mod summarize;
pub mod validate;
