//! API responses and the normalised error shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status code signalling a successful API call.
pub const SUCCESS_CODE: u16 = 200;

/// Status code used when a transport failure is normalised into a response.
const TRANSPORT_FAILURE_CODE: u16 = 500;

/// Status header accompanying every API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeader {
    /// Numeric status code; `200` means success.
    pub code: u16,
    /// Human-readable status description.
    pub description: String,
    /// Optional per-failure detail messages, in server order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detailed_messages: Vec<String>,
}

/// A response returned by the panel API, or synthesised from a transport
/// failure so both take the same rendering path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Status header.
    pub header: ResponseHeader,
    /// Structured response body; only displayed on success.
    #[serde(default)]
    pub body: Value,
}

impl ApiResponse {
    /// Builds a successful response around a body value.
    #[must_use]
    pub fn success(body: Value) -> Self {
        Self {
            header: ResponseHeader {
                code: SUCCESS_CODE,
                description: String::from("OK"),
                detailed_messages: Vec::new(),
            },
            body,
        }
    }

    /// Builds a failed response with a code, description, and detail lines.
    #[must_use]
    pub fn failure(
        code: u16,
        description: impl Into<String>,
        detailed_messages: Vec<String>,
    ) -> Self {
        Self {
            header: ResponseHeader {
                code,
                description: description.into(),
                detailed_messages,
            },
            body: Value::Null,
        }
    }

    /// Normalises a transport or protocol failure into a displayable error
    /// response, so the rendering path is unified regardless of failure
    /// origin.
    #[must_use]
    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self::failure(
            TRANSPORT_FAILURE_CODE,
            "internal transport failure",
            vec![message.into()],
        )
    }

    /// Returns `true` when the header signals success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.header.code == SUCCESS_CODE
    }
}
