//! Transport session
//!
//! Owns one TCP connection for exactly one request/response exchange:
//! connect, read the greeting, write the command, read the reply, close.
//! The connection is never reused and is closed on every exit path when the
//! session drops, so no socket can leak regardless of where the transaction
//! failed.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};

use crate::config::Endpoint;
use crate::error::{PjlinkError, Result};

/// Line delimiter: PJLink frames lines with a bare carriage return,
/// not a CRLF pair
const DELIMITER: u8 = b'\r';

/// A connected transport session
pub struct Session {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,
}

impl Session {
    /// Open a connection to the endpoint
    ///
    /// Applies the endpoint's connect timeout, then mirrors its read timeout
    /// onto the socket as read and write deadlines so no later call can
    /// block indefinitely.
    pub fn connect(endpoint: &Endpoint) -> Result<Self> {
        let addr = endpoint.socket_addr();

        let stream = resolve(&addr)
            .and_then(|sock| TcpStream::connect_timeout(&sock, endpoint.connect_timeout))
            .map_err(|source| PjlinkError::Connection {
                addr: addr.clone(),
                source,
            })?;

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;
        stream.set_read_timeout(Some(endpoint.read_timeout))?;
        stream.set_write_timeout(Some(endpoint.read_timeout))?;

        tracing::debug!("Connected to {}", addr);

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            peer_addr: addr,
        })
    }

    /// Read one line, delimited by a bare `\r`
    ///
    /// The final unterminated fragment at end-of-stream is still delivered
    /// as a line rather than discarded.
    pub fn read_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        self.reader.read_until(DELIMITER, &mut buf)?;

        if buf.last() == Some(&DELIMITER) {
            buf.pop();
        }

        let line = String::from_utf8(buf).map_err(|e| {
            PjlinkError::MalformedResponse(format!("Line is not valid UTF-8: {}", e))
        })?;

        tracing::debug!("{} -> {:?}", self.peer_addr, line);
        Ok(line)
    }

    /// Write one encoded command line, terminated with `\r`
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        tracing::debug!("{} <- {:?}", self.peer_addr, line);

        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(&[DELIMITER])?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Resolve `host:port` to the first usable socket address
fn resolve(addr: &str) -> std::io::Result<SocketAddr> {
    addr.to_socket_addrs()?.next().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::AddrNotAvailable,
            format!("{} resolved to no addresses", addr),
        )
    })
}
