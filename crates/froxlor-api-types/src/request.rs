//! API command requests and their wire encoding.

use std::io::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::ParamMap;

/// A named command forwarded to the panel API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// Command name, e.g. `customer.list`.
    pub command: String,
    /// Parsed `name=value` parameters, absent when the command line carried
    /// none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ParamMap>,
}

impl ApiRequest {
    /// Builds a request without parameters.
    #[must_use]
    pub fn bare(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            params: None,
        }
    }

    /// Builds a request carrying a parameter map.
    #[must_use]
    pub fn with_params(command: impl Into<String>, params: ParamMap) -> Self {
        Self {
            command: command.into(),
            params: Some(params),
        }
    }

    /// Writes the request as a single JSON line and flushes the writer.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Serialise`] when the request cannot be encoded
    /// and [`WireError::Io`] when the writer rejects the payload.
    pub fn write_jsonl<W>(&self, writer: &mut W) -> Result<(), WireError>
    where
        W: Write,
    {
        serde_json::to_writer(&mut *writer, self).map_err(WireError::Serialise)?;
        writer.write_all(b"\n").map_err(WireError::Io)?;
        writer.flush().map_err(WireError::Io)
    }
}

/// Errors raised while encoding a request onto the wire.
#[derive(Debug, Error)]
pub enum WireError {
    /// The request could not be serialised to JSON.
    #[error("failed to serialise api request: {0}")]
    Serialise(#[source] serde_json::Error),
    /// Writing to the underlying stream failed.
    #[error("failed to write api request: {0}")]
    Io(#[source] std::io::Error),
}
