//! Error types for the PJLink client
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using PjlinkError
pub type Result<T> = std::result::Result<T, PjlinkError>;

/// Unified error type for PJLink operations
#[derive(Debug, Error)]
pub enum PjlinkError {
    // -------------------------------------------------------------------------
    // Request Errors (local, no I/O attempted)
    // -------------------------------------------------------------------------
    #[error("Invalid request: {0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Failed to connect to device at {addr}: {source}")]
    Connection {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors (the reply did not decode)
    // -------------------------------------------------------------------------
    #[error("Device sent an empty response")]
    EmptyResponse,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Device rejected the password")]
    AuthenticationFailed,

    // -------------------------------------------------------------------------
    // Command Errors (the reply decoded, but the device refused)
    // -------------------------------------------------------------------------
    #[error("Command {command} failed: device returned {code}")]
    CommandFailure { command: String, code: String },
}
