//! Shared domain types for the Lovewall gateway.
//!
//! Request payloads, validated records, per-component error enums, and the
//! gateway configuration model. This crate performs no I/O; everything here
//! is plain data consumed by `lovewall-core` and the adapter crates.

pub mod config;
pub mod contact;
pub mod error;
pub mod identity;
pub mod summary;
pub mod testimonial;
