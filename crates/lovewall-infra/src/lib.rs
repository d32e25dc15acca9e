//! Infrastructure adapters for the Lovewall gateway.
//!
//! Concrete implementations of the `lovewall-core` trait seams:
//!
//! - [`gemini`] / [`huggingface`]: `SummaryProvider` backends, selected via
//!   the [`provider`] factory.
//! - [`smtp`]: `Mailer` over lettre's async SMTP transport.
//! - [`supabase`]: `TestimonialStore` and `IdentityVerifier` over the
//!   datastore's REST surface.
//! - [`env`]: environment-variable configuration loader.
//!
//! Every adapter owns one explicitly constructed client with a bounded
//! timeout; nothing here is a module-level global.

pub mod env;
pub mod gemini;
pub mod huggingface;
pub mod provider;
pub mod smtp;
pub mod supabase;
