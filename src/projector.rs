//! Client façade
//!
//! A `Projector` composes validation, transport, authentication, and the
//! codec into one operation: perform a command against a device and return
//! the parsed result or a typed error. Each call opens and closes its own
//! socket, so a `Projector` can be cloned and used from several threads
//! without locking; the device may interleave concurrent transactions at
//! its own discretion.

use crate::auth::Challenge;
use crate::config::Endpoint;
use crate::error::{PjlinkError, Result};
use crate::network::Session;
use crate::protocol::{self, Request, Response};

/// Power parameter values
pub const POWER_ON: &str = "1";
pub const POWER_OFF: &str = "0";

/// A PJLink device client
#[derive(Debug, Clone)]
pub struct Projector {
    endpoint: Endpoint,
}

impl Projector {
    /// Create a client from address, port, and password
    ///
    /// A zero port falls back to the well-known PJLink port.
    pub fn new(address: impl Into<String>, port: u16, password: impl Into<String>) -> Self {
        let endpoint = Endpoint::builder(address)
            .port(port)
            .password(password)
            .build();
        Self { endpoint }
    }

    /// Create a client from a prebuilt endpoint
    pub fn with_endpoint(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    /// The configured endpoint
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    // -------------------------------------------------------------------------
    // Primitive
    // -------------------------------------------------------------------------

    /// Perform one request/response transaction
    ///
    /// Validates locally first; no socket is opened for a malformed request.
    /// Then: connect, read the greeting, derive the digest token if the
    /// device asks for authentication, send the encoded command, and decode
    /// the single reply line. The connection closes when the session drops,
    /// on success and on every failure path.
    pub fn send_request(&self, request: &Request) -> Result<Response> {
        request.validate()?;

        let mut session = Session::connect(&self.endpoint)?;

        let greeting = session.read_line()?;
        let challenge = Challenge::parse(&greeting);
        if challenge.required() {
            tracing::debug!("Device requires authentication");
        }
        let token = challenge.token(&self.endpoint.password);

        session.write_line(&protocol::encode(request, &token))?;

        let reply = session.read_line()?;
        protocol::decode(&reply)
    }

    // -------------------------------------------------------------------------
    // Convenience Operations
    // -------------------------------------------------------------------------

    /// Query power status; the returned value is the device's power state code
    pub fn power_status(&self) -> Result<Response> {
        self.send_request(&Request::query("POWR"))
    }

    /// Turn the device on
    pub fn power_on(&self) -> Result<()> {
        self.set_property("POWR", POWER_ON)
    }

    /// Turn the device off
    pub fn power_off(&self) -> Result<()> {
        self.set_property("POWR", POWER_OFF)
    }

    /// Query a property, returning its first value
    pub fn get_property(&self, property: &str) -> Result<String> {
        let response = self.send_request(&Request::query(property))?;
        // Decode guarantees at least one value
        Ok(response.values.into_iter().next().unwrap_or_default())
    }

    /// Query a property, returning all values in wire order
    ///
    /// Used for multi-value replies such as the input instance list.
    pub fn get_property_values(&self, property: &str) -> Result<Vec<String>> {
        let response = self.send_request(&Request::query(property))?;
        Ok(response.values)
    }

    /// Set a property and check the device accepted it
    ///
    /// A reply that decodes but does not carry the success token is a
    /// command failure: the request was well-formed, the device refused or
    /// could not perform it. This is distinct from transport and structural
    /// errors.
    pub fn set_property(&self, property: &str, value: &str) -> Result<()> {
        let response = self.send_request(&Request::class1(property, value))?;
        if response.success() {
            Ok(())
        } else {
            Err(PjlinkError::CommandFailure {
                command: response.command,
                code: response.values.into_iter().next().unwrap_or_default(),
            })
        }
    }

    /// Query which protocol class the device supports
    pub fn class_info(&self) -> Result<String> {
        self.get_property("CLSS")
    }
}
