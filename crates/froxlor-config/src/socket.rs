//! Socket endpoint addressing for the panel API.

use std::fmt;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Declarative address of the panel API socket.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "transport", rename_all = "snake_case")]
pub enum SocketEndpoint {
    /// Unix domain socket endpoint.
    Unix {
        /// Filesystem path of the socket.
        path: Utf8PathBuf,
    },
    /// TCP socket endpoint.
    Tcp {
        /// Host name or address.
        host: String,
        /// TCP port.
        port: u16,
    },
}

impl SocketEndpoint {
    /// Builds a Unix domain socket endpoint.
    #[must_use]
    pub fn unix(path: impl Into<Utf8PathBuf>) -> Self {
        Self::Unix { path: path.into() }
    }

    /// Builds a TCP socket endpoint.
    #[must_use]
    pub fn tcp(host: impl Into<String>, port: u16) -> Self {
        Self::Tcp {
            host: host.into(),
            port,
        }
    }

    /// Returns the Unix socket path when the endpoint uses the Unix transport.
    #[must_use]
    pub fn unix_path(&self) -> Option<&Utf8Path> {
        match self {
            Self::Unix { path } => Some(path.as_ref()),
            Self::Tcp { .. } => None,
        }
    }
}

impl fmt::Display for SocketEndpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix { path } => write!(formatter, "unix://{path}"),
            Self::Tcp { host, port } => write!(formatter, "tcp://{host}:{port}"),
        }
    }
}

impl FromStr for SocketEndpoint {
    type Err = SocketParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(input)?;
        match url.scheme() {
            "unix" => {
                // `unix://relative.sock` parses the leading component as a
                // host, so stitch host and path back together.
                let mut raw = String::new();
                if let Some(host) = url.host_str() {
                    raw.push_str(host);
                }
                raw.push_str(url.path());
                let path = percent_decode_str(&raw)
                    .decode_utf8()
                    .map_err(|_| SocketParseError::InvalidUnixPath {
                        input: input.to_owned(),
                    })?
                    .into_owned();
                if path.is_empty() {
                    return Err(SocketParseError::InvalidUnixPath {
                        input: input.to_owned(),
                    });
                }
                Ok(Self::unix(path))
            }
            "tcp" => {
                let host = url
                    .host_str()
                    .ok_or_else(|| SocketParseError::MissingHost {
                        input: input.to_owned(),
                    })?
                    .to_owned();
                let port = url.port().ok_or_else(|| SocketParseError::MissingPort {
                    input: input.to_owned(),
                })?;
                Ok(Self::tcp(host, port))
            }
            other => Err(SocketParseError::UnsupportedScheme {
                scheme: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while parsing a [`SocketEndpoint`] from text.
#[derive(Debug, Error)]
pub enum SocketParseError {
    /// The input was not a valid URL.
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
    /// The URL scheme was neither `unix` nor `tcp`.
    #[error("unsupported endpoint scheme '{scheme}' (expected 'unix' or 'tcp')")]
    UnsupportedScheme {
        /// Scheme found in the input.
        scheme: String,
    },
    /// A TCP endpoint was missing its host component.
    #[error("tcp endpoint '{input}' is missing a host")]
    MissingHost {
        /// Original input text.
        input: String,
    },
    /// A TCP endpoint was missing its port component.
    #[error("tcp endpoint '{input}' is missing a port")]
    MissingPort {
        /// Original input text.
        input: String,
    },
    /// A Unix endpoint resolved to an empty or non-UTF-8 path.
    #[error("unix endpoint '{input}' does not contain a usable path")]
    InvalidUnixPath {
        /// Original input text.
        input: String,
    },
}
