//! Request handlers, one module per flow.

pub mod contact;
pub mod summarize;
pub mod testimonial;
