//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Reply Token Layout
//! ```text
//! ┌─────┬────────┬──────────────┬─────┬───────────┐
//! │ %   │ class  │   command    │  =  │  value    │
//! │ [0] │  [1]   │    [2..6]    │ [6] │  [7..]    │
//! └─────┴────────┴──────────────┴─────┴───────────┘
//! ```
//!
//! These offsets are a documented wire contract; decode checks the token
//! length and the fixed marker/separator bytes before slicing.

use crate::error::{PjlinkError, Result};
use crate::protocol::{Request, Response, ERRA};

/// Minimum length of the first reply token: marker + class digit +
/// 4-character command + `=` separator
const MIN_REPLY_TOKEN_LEN: usize = 7;

/// Encode a validated request into its wire form
///
/// Output: `token + "%" + class digit + command + " " + parameter`. The
/// digest token may be empty (no authentication), contributing zero bytes.
/// No line terminator is appended; framing is the transport's job.
pub fn encode(request: &Request, token: &str) -> String {
    format!(
        "{}%{}{} {}",
        token, request.class, request.command, request.parameter
    )
}

/// Decode one raw reply line into a structured response
///
/// Fails rather than truncating: a first token shorter than the fixed
/// structural layout is a malformed response, not an empty value.
pub fn decode(raw: &str) -> Result<Response> {
    if raw.is_empty() {
        return Err(PjlinkError::EmptyResponse);
    }

    // Password rejection wins over structural parsing
    if raw.contains(ERRA) {
        return Err(PjlinkError::AuthenticationFailed);
    }

    let mut tokens = raw.split(' ');

    // `split` yields at least one token for a non-empty string
    let head = tokens.next().unwrap_or_default();

    if head.len() < MIN_REPLY_TOKEN_LEN {
        return Err(PjlinkError::MalformedResponse(format!(
            "Reply token {:?} is shorter than the minimum {} characters",
            head, MIN_REPLY_TOKEN_LEN
        )));
    }

    // The structural prefix must be ASCII so the fixed offsets land on
    // character boundaries; values after it may be any UTF-8
    if !head.as_bytes()[..MIN_REPLY_TOKEN_LEN].is_ascii() {
        return Err(PjlinkError::MalformedResponse(format!(
            "Reply token {:?} has a non-ASCII structural prefix",
            head
        )));
    }

    if !head.starts_with('%') {
        return Err(PjlinkError::MalformedResponse(format!(
            "Reply token {:?} does not start with the % framing marker",
            head
        )));
    }

    if head.as_bytes()[6] != b'=' {
        return Err(PjlinkError::MalformedResponse(format!(
            "Reply token {:?} is missing the = separator",
            head
        )));
    }

    // First value is the head's tail; any further tokens follow in order
    let mut values = vec![head[7..].to_string()];
    values.extend(tokens.map(str::to_string));

    Ok(Response {
        class: head[1..2].to_string(),
        command: head[2..6].to_string(),
        values,
    })
}
