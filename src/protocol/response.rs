//! Response definitions
//!
//! Represents a decoded reply line from a device.

use serde::Serialize;

use crate::protocol::OK;

/// A decoded command response
///
/// Immutable once built; serializes directly to a machine-readable report.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    /// Echoed class digit from the reply
    pub class: String,

    /// Echoed 4-character command code
    pub command: String,

    /// Returned tokens, in wire order; never empty on successful decode.
    /// Simple queries return one value; set/action commands return `OK` or
    /// an error code as the first value.
    pub values: Vec<String>,
}

impl Response {
    /// Whether the command completed without a device-reported error
    ///
    /// Meaningful for set/action commands, where the device echoes `OK`.
    pub fn success(&self) -> bool {
        self.values.first().is_some_and(|v| v == OK)
    }
}
