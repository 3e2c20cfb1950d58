//! Request definitions
//!
//! Represents a single command to send to a device. Requests are stateless:
//! built immediately before each transaction and discarded after.

use crate::error::{PjlinkError, Result};

/// Commands the class-1 protocol defines, each a 4-character code
///
/// Read-only static data; never mutated after startup.
pub const CLASS1_COMMANDS: &[&str] = &[
    "POWR", // power on/off/status
    "INPT", // input switch
    "INST", // input instance list
    "AVMT", // audio/video mute
    "ERST", // error status
    "LAMP", // lamp hours
    "NAME", // device name
    "INF1", // manufacturer info
    "INF2", // product info
    "INFO", // other info
    "CLSS", // class identification
];

/// Maximum parameter length in bytes
const MAX_PARAMETER_LEN: usize = 128;

/// A command request
#[derive(Debug, Clone)]
pub struct Request {
    /// Protocol class: 1 or 2 (only class 1 is implemented)
    pub class: u8,

    /// 4-character command code, e.g. "POWR"
    pub command: String,

    /// Parameter; `?` queries the current value, other values set it
    pub parameter: String,
}

impl Request {
    /// Build a class-1 request
    pub fn class1(command: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            class: 1,
            command: command.into(),
            parameter: parameter.into(),
        }
    }

    /// Build a class-1 query (`?` parameter) for a property
    pub fn query(command: impl Into<String>) -> Self {
        Self::class1(command, "?")
    }

    /// Check the request before any I/O is attempted
    ///
    /// Each rule is independently reportable; the first violation wins.
    pub fn validate(&self) -> Result<()> {
        if self.command.len() != 4 {
            return Err(PjlinkError::Validation(format!(
                "Command {:?} must be exactly 4 characters",
                self.command
            )));
        }

        // The protocol defines no zero-length parameter
        if self.parameter.is_empty() {
            return Err(PjlinkError::Validation(
                "Parameter must not be empty".to_string(),
            ));
        }

        if self.parameter.len() > MAX_PARAMETER_LEN {
            return Err(PjlinkError::Validation(format!(
                "Parameter exceeds maximum of {} bytes",
                MAX_PARAMETER_LEN
            )));
        }

        match self.class {
            1 => {
                if !CLASS1_COMMANDS.contains(&self.command.as_str()) {
                    return Err(PjlinkError::Validation(format!(
                        "{:?} is not a class 1 command",
                        self.command
                    )));
                }
                Ok(())
            }
            // Recognized but unsupported: reject before any socket is opened
            2 => Err(PjlinkError::Validation(
                "Class 2 is not implemented".to_string(),
            )),
            other => Err(PjlinkError::Validation(format!(
                "Invalid class {}: must be 1 or 2",
                other
            ))),
        }
    }
}
