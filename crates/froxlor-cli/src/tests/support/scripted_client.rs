//! In-process test double for the panel API client.

use std::collections::VecDeque;

use froxlor_api_types::{ApiRequest, ApiResponse};

use crate::client::{ApiClient, ClientError};

/// Replays queued responses and records every request it receives.
#[derive(Default)]
pub(in crate::tests) struct ScriptedClient {
    script: VecDeque<Result<ApiResponse, ClientError>>,
    requests: Vec<ApiRequest>,
}

impl ScriptedClient {
    pub(in crate::tests) fn new() -> Self {
        Self::default()
    }

    /// Queues a response for the next request.
    pub(in crate::tests) fn push_response(&mut self, response: ApiResponse) -> &mut Self {
        self.script.push_back(Ok(response));
        self
    }

    /// Queues a client failure for the next request.
    pub(in crate::tests) fn push_error(&mut self, error: ClientError) -> &mut Self {
        self.script.push_back(Err(error));
        self
    }

    /// Returns the requests received so far.
    pub(in crate::tests) fn requests(&self) -> &[ApiRequest] {
        self.requests.as_slice()
    }
}

impl ApiClient for ScriptedClient {
    fn send(&mut self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        self.requests.push(request.clone());
        self.script.pop_front().unwrap_or_else(|| {
            Err(ClientError::EmptyResponse {
                endpoint: String::from("scripted"),
            })
        })
    }
}
