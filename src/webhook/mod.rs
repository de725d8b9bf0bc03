//! Webhook signature helpers (HMAC-SHA256)

pub mod signature;

pub use signature::*;
