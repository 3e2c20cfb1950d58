//! # pjlink
//!
//! A client for the PJLink class-1 protocol: query and control networked
//! projectors over TCP with:
//! - Challenge-based MD5 authentication
//! - Request validation before any I/O
//! - Typed errors separating transport, protocol, and device failures
//! - One connection per transaction (no pooling, no shared state)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Projector                             │
//! │          (validate, compose, classify errors)                │
//! └───────┬──────────────────┬─────────────────────┬────────────┘
//!         │                  │                     │
//!         ▼                  ▼                     ▼
//!  ┌─────────────┐    ┌─────────────┐       ┌─────────────┐
//!  │   Request   │    │   Session   │       │    Codec    │
//!  │ (validate)  │    │ (one-shot   │       │ (encode /   │
//!  │             │    │  TCP, \r    │       │  decode)    │
//!  └─────────────┘    │  framing)   │       └─────────────┘
//!                     └──────┬──────┘
//!                            ▼
//!                     ┌─────────────┐
//!                     │  Challenge  │
//!                     │ (MD5 token) │
//!                     └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use pjlink::Projector;
//!
//! let projector = Projector::new("192.168.1.20", 0, "secret");
//! projector.power_on()?;
//! let name = projector.get_property("NAME")?;
//! # Ok::<(), pjlink::PjlinkError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod config;
pub mod error;

pub mod network;
pub mod projector;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::{Endpoint, DEFAULT_PORT};
pub use error::{PjlinkError, Result};
pub use projector::Projector;
pub use protocol::{Request, Response};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the pjlink crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
