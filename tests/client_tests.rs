//! Client Tests
//!
//! End-to-end tests against an in-process mock device: a TCP listener that
//! speaks one greeting/command/reply exchange per connection.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use pjlink::auth::Challenge;
use pjlink::{Endpoint, PjlinkError, Projector};

/// Spawn a one-shot mock device
///
/// Sends `greeting`, captures the client's command line, then sends `reply`
/// (or closes the connection without replying when `reply` is `None`).
/// Returns the device address and a receiver for the captured command line.
fn spawn_device(
    greeting: &'static str,
    reply: Option<&'static str>,
) -> (SocketAddr, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        stream.write_all(greeting.as_bytes()).unwrap();
        stream.write_all(b"\r").unwrap();

        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut buf = Vec::new();
        reader.read_until(b'\r', &mut buf).unwrap();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        tx.send(String::from_utf8(buf).unwrap()).unwrap();

        if let Some(reply) = reply {
            stream.write_all(reply.as_bytes()).unwrap();
            stream.write_all(b"\r").unwrap();
        }
    });

    (addr, rx)
}

fn projector_for(addr: SocketAddr, password: &str) -> Projector {
    let endpoint = Endpoint::builder(addr.ip().to_string())
        .port(addr.port())
        .password(password)
        .connect_timeout(Duration::from_secs(2))
        .read_timeout(Duration::from_secs(2))
        .build();
    Projector::with_endpoint(endpoint)
}

// =============================================================================
// Endpoint Configuration
// =============================================================================

#[test]
fn test_zero_port_normalizes_to_well_known_port() {
    let endpoint = Endpoint::builder("projector.local").port(0).build();
    assert_eq!(endpoint.socket_addr(), "projector.local:4352");

    // The default constructor starts from the well-known port already
    assert_eq!(
        Endpoint::new("projector.local").socket_addr(),
        "projector.local:4352"
    );
}

// =============================================================================
// Happy Path
// =============================================================================

#[test]
fn test_power_on_without_password() {
    let (addr, rx) = spawn_device("PJLINK 0", Some("%1POWR=OK"));
    let projector = projector_for(addr, "");

    projector.power_on().unwrap();

    // No auth means an empty digest prefix
    assert_eq!(rx.recv().unwrap(), "%1POWR 1");
}

#[test]
fn test_unterminated_reply_is_delivered() {
    // Device sends the reply without a trailing \r and closes; the final
    // fragment at end-of-stream still counts as a line
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream.write_all(b"PJLINK 0\r").unwrap();

        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut buf = Vec::new();
        reader.read_until(b'\r', &mut buf).unwrap();

        stream.write_all(b"%1POWR=OK").unwrap();
    });

    let projector = projector_for(addr, "");
    projector.power_on().unwrap();
}

#[test]
fn test_power_status_query() {
    let (addr, _rx) = spawn_device("PJLINK 0", Some("%1POWR=1"));
    let projector = projector_for(addr, "");

    let resp = projector.power_status().unwrap();
    assert_eq!(resp.command, "POWR");
    assert_eq!(resp.values, vec!["1"]);
}

#[test]
fn test_get_property() {
    let (addr, rx) = spawn_device("PJLINK 0", Some("%1NAME=Boardroom"));
    let projector = projector_for(addr, "");

    let name = projector.get_property("NAME").unwrap();
    assert_eq!(name, "Boardroom");
    assert_eq!(rx.recv().unwrap(), "%1NAME ?");
}

#[test]
fn test_get_property_values_multi() {
    let (addr, _rx) = spawn_device("PJLINK 0", Some("%1INST=11 12 31"));
    let projector = projector_for(addr, "");

    let inputs = projector.get_property_values("INST").unwrap();
    assert_eq!(inputs, vec!["11", "12", "31"]);
}

// =============================================================================
// Authentication
// =============================================================================

#[test]
fn test_auth_greeting_prefixes_digest() {
    let (addr, rx) = spawn_device("PJLINK 1 abc123", Some("%1POWR=OK"));
    let projector = projector_for(addr, "secret");

    projector.power_on().unwrap();

    let expected_token = Challenge {
        seed: Some("abc123".to_string()),
    }
    .token("secret");
    assert_eq!(rx.recv().unwrap(), format!("{}%1POWR 1", expected_token));
}

#[test]
fn test_rejected_password_is_auth_failure() {
    let (addr, _rx) = spawn_device("PJLINK 1 abc123", Some("PJLINK ERRA"));
    let projector = projector_for(addr, "wrong");

    let err = projector.power_on().unwrap_err();
    assert!(matches!(err, PjlinkError::AuthenticationFailed));
}

// =============================================================================
// Failure Classification
// =============================================================================

#[test]
fn test_device_refusal_is_command_failure() {
    let (addr, _rx) = spawn_device("PJLINK 0", Some("%1POWR=ERR2"));
    let projector = projector_for(addr, "");

    let err = projector.power_on().unwrap_err();
    match err {
        PjlinkError::CommandFailure { command, code } => {
            assert_eq!(command, "POWR");
            assert_eq!(code, "ERR2");
        }
        other => panic!("Expected CommandFailure, got {:?}", other),
    }
}

#[test]
fn test_closed_connection_yields_empty_response() {
    // Device greets, then closes without replying
    let (addr, _rx) = spawn_device("PJLINK 0", None);
    let projector = projector_for(addr, "");

    let err = projector.power_on().unwrap_err();
    assert!(matches!(err, PjlinkError::EmptyResponse));
}

#[test]
fn test_malformed_reply_is_rejected() {
    let (addr, _rx) = spawn_device("PJLINK 0", Some("garbage"));
    let projector = projector_for(addr, "");

    let err = projector.power_on().unwrap_err();
    assert!(matches!(err, PjlinkError::MalformedResponse(_)));
}

#[test]
fn test_invalid_request_opens_no_socket() {
    // Address is never connected to: validation fails first
    let projector = Projector::new("127.0.0.1", 1, "");
    let err = projector
        .send_request(&pjlink::Request::class1("BOGUS", "?"))
        .unwrap_err();
    assert!(matches!(err, PjlinkError::Validation(_)));
}

#[test]
fn test_connection_refused_is_connection_error() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let projector = projector_for(addr, "");
    let err = projector.power_status().unwrap_err();
    assert!(matches!(err, PjlinkError::Connection { .. }));
}
