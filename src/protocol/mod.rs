//! Protocol Module
//!
//! Defines the PJLink class-1 wire protocol.
//!
//! ## Wire Format
//!
//! All lines are delimited by a single carriage return (`\r`).
//!
//! ### Command Line (client → device)
//! ```text
//! <digest-hex-or-empty>%<class digit><command 4 chars> <parameter>
//! ```
//!
//! ### Reply Line (device → client)
//! ```text
//! %<class digit><command 4 chars>=<value>[ <value>...]
//! ```
//!
//! The first reply token has a fixed layout: position 0 is the `%` framing
//! marker, position 1 the class digit, positions 2-5 the command code,
//! position 6 the `=` separator, and positions 7.. the first value. A reply
//! containing the token `ERRA` anywhere signals password rejection. The
//! literal `OK` as the first value signals success for set/action commands.

mod codec;
mod request;
mod response;

pub use codec::{decode, encode};
pub use request::{Request, CLASS1_COMMANDS};
pub use response::Response;

/// Authentication-failure marker the device may embed in any reply
pub const ERRA: &str = "ERRA";

/// Success token for set/action commands
pub const OK: &str = "OK";
