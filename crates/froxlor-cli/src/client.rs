//! Socket client for the panel API.
//!
//! The [`ApiClient`] trait is the seam between the prompt loop and the wire:
//! production code talks to the panel over a Unix or TCP socket with one
//! JSONL request/response exchange per command, while tests substitute a
//! scripted client.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use thiserror::Error;

use froxlor_api_types::{ApiRequest, ApiResponse, WireError};
use froxlor_config::SocketEndpoint;

#[cfg(unix)]
use std::os::unix::net::UnixStream;

#[cfg(unix)]
use socket2::{Domain, SockAddr, Socket, Type};

const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Sends commands to the panel API and returns its responses.
pub trait ApiClient {
    /// Performs one blocking request/response exchange.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the endpoint cannot be reached or the
    /// exchange fails; the caller normalises this into an error response.
    fn send(&mut self, request: &ApiRequest) -> Result<ApiResponse, ClientError>;
}

impl<C> ApiClient for &mut C
where
    C: ApiClient + ?Sized,
{
    fn send(&mut self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        (**self).send(request)
    }
}

/// Production client connecting per command to the configured endpoint.
#[derive(Debug, Clone)]
pub struct SocketClient {
    endpoint: SocketEndpoint,
}

impl SocketClient {
    /// Creates a client for the given endpoint.
    #[must_use]
    pub const fn new(endpoint: SocketEndpoint) -> Self {
        Self { endpoint }
    }
}

impl ApiClient for SocketClient {
    fn send(&mut self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        let mut connection = connect(&self.endpoint)?;
        request
            .write_jsonl(&mut connection)
            .map_err(ClientError::Send)?;

        let mut reader = BufReader::new(connection);
        let mut line = String::new();
        let read = reader.read_line(&mut line).map_err(ClientError::Receive)?;
        if read == 0 || line.trim().is_empty() {
            return Err(ClientError::EmptyResponse {
                endpoint: self.endpoint.to_string(),
            });
        }
        serde_json::from_str(&line).map_err(ClientError::Parse)
    }
}

enum Connection {
    Tcp(TcpStream),
    #[cfg(unix)]
    Unix(UnixStream),
}

impl Read for Connection {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Tcp(stream) => stream.read(buf),
            #[cfg(unix)]
            Self::Unix(stream) => stream.read(buf),
        }
    }
}

impl Write for Connection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Tcp(stream) => stream.write(buf),
            #[cfg(unix)]
            Self::Unix(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Tcp(stream) => stream.flush(),
            #[cfg(unix)]
            Self::Unix(stream) => stream.flush(),
        }
    }
}

fn connect(endpoint: &SocketEndpoint) -> Result<Connection, ClientError> {
    match endpoint {
        SocketEndpoint::Tcp { host, port } => {
            let endpoint_display = endpoint.to_string();
            let address = resolve_tcp_address(host, *port).map_err(|error| ClientError::Resolve {
                endpoint: endpoint_display.clone(),
                source: error,
            })?;

            TcpStream::connect_timeout(&address, CONNECTION_TIMEOUT)
                .map(Connection::Tcp)
                .map_err(|source| ClientError::Connect {
                    endpoint: endpoint_display,
                    source,
                })
        }
        SocketEndpoint::Unix { path } => {
            #[cfg(unix)]
            {
                connect_unix(path.as_str()).map_err(|source| ClientError::Connect {
                    endpoint: endpoint.to_string(),
                    source,
                })
            }

            #[cfg(not(unix))]
            {
                Err(ClientError::UnsupportedUnixTransport(endpoint.to_string()))
            }
        }
    }
}

fn resolve_tcp_address(host: &str, port: u16) -> io::Result<SocketAddr> {
    let mut addrs = (host, port).to_socket_addrs()?;
    addrs
        .find(|addr| matches!(addr, SocketAddr::V4(_) | SocketAddr::V6(_)))
        .ok_or_else(|| io::Error::new(io::ErrorKind::AddrNotAvailable, "no resolved addresses"))
}

#[cfg(unix)]
fn connect_unix(path: &str) -> io::Result<Connection> {
    let socket = Socket::new(Domain::UNIX, Type::STREAM, None)?;
    let address = SockAddr::unix(path)?;
    socket.connect_timeout(&address, CONNECTION_TIMEOUT)?;
    let stream: UnixStream = socket.into();
    Ok(Connection::Unix(stream))
}

/// Errors raised while talking to the panel API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The TCP host could not be resolved.
    #[error("failed to resolve api address {endpoint}: {source}")]
    Resolve {
        /// Configured endpoint.
        endpoint: String,
        /// Underlying resolution error.
        source: io::Error,
    },
    /// The connection could not be established.
    #[error("failed to connect to api at {endpoint}: {source}")]
    Connect {
        /// Configured endpoint.
        endpoint: String,
        /// Underlying connect error.
        source: io::Error,
    },
    /// Unix sockets are not available on this platform.
    #[cfg(not(unix))]
    #[error("platform does not support Unix sockets: {0}")]
    UnsupportedUnixTransport(String),
    /// The request could not be written.
    #[error("failed to send api request: {0}")]
    Send(#[source] WireError),
    /// Reading the response failed.
    #[error("failed to read api response: {0}")]
    Receive(#[source] io::Error),
    /// The connection closed without a response line.
    #[error("api at {endpoint} closed the stream without a response")]
    EmptyResponse {
        /// Configured endpoint.
        endpoint: String,
    },
    /// The response line was not valid JSON.
    #[error("failed to parse api response: {0}")]
    Parse(#[source] serde_json::Error),
}
