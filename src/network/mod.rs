//! Network Module
//!
//! One-shot TCP transport for a single request/response exchange.

mod session;

pub use session::Session;
