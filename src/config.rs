//! Device endpoint configuration
//!
//! Centralized configuration with sensible defaults. An `Endpoint` is an
//! immutable value: it carries no live connection state, so it can be cloned
//! and shared across threads freely. Every transaction opens and closes its
//! own socket.

use std::time::Duration;

/// Well-known PJLink TCP port
pub const DEFAULT_PORT: u16 = 4352;

/// Default connect timeout (also used as the read/write deadline)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A PJLink device endpoint
#[derive(Debug, Clone)]
pub struct Endpoint {
    // -------------------------------------------------------------------------
    // Device Address
    // -------------------------------------------------------------------------
    /// Hostname or IP address of the device
    pub address: String,

    /// TCP port (0 falls back to the well-known port 4352)
    pub port: u16,

    // -------------------------------------------------------------------------
    // Authentication
    // -------------------------------------------------------------------------
    /// Shared secret for challenge authentication (may be empty)
    pub password: String,

    // -------------------------------------------------------------------------
    // Timeouts
    // -------------------------------------------------------------------------
    /// Bounded timeout for establishing the TCP connection
    pub connect_timeout: Duration,

    /// Deadline applied to each line read (and write) on the open socket
    pub read_timeout: Duration,
}

impl Endpoint {
    /// Create an endpoint for `address` with the default port and no password
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            port: DEFAULT_PORT,
            password: String::new(),
            connect_timeout: DEFAULT_TIMEOUT,
            read_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a new endpoint builder
    pub fn builder(address: impl Into<String>) -> EndpointBuilder {
        EndpointBuilder {
            endpoint: Endpoint::new(address),
        }
    }

    /// The `host:port` string used for the TCP connection
    ///
    /// This is the single normalization point for the port: zero, however it
    /// was set, is substituted with the well-known port here. `new` merely
    /// starts from the well-known port as its default.
    pub fn socket_addr(&self) -> String {
        let port = if self.port == 0 {
            DEFAULT_PORT
        } else {
            self.port
        };
        format!("{}:{}", self.address, port)
    }
}

/// Builder for Endpoint
pub struct EndpointBuilder {
    endpoint: Endpoint,
}

impl EndpointBuilder {
    /// Set the TCP port (0 means the well-known port)
    pub fn port(mut self, port: u16) -> Self {
        self.endpoint.port = port;
        self
    }

    /// Set the device password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.endpoint.password = password.into();
        self
    }

    /// Set the connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.endpoint.connect_timeout = timeout;
        self
    }

    /// Set the read/write deadline for the open socket
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.endpoint.read_timeout = timeout;
        self
    }

    pub fn build(self) -> Endpoint {
        self.endpoint
    }
}
