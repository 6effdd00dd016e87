//! Mock implementations for testing.
//!
//! Provides a queued-response transport so services can be exercised
//! without a network.

use crate::errors::{PinnacleError, PinnacleResult};
use crate::transport::{HttpTransport, JsonRequest, RawPutRequest};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;

/// Mock response configuration
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// Response body
    pub body: String,
    /// HTTP status code
    pub status: u16,
}

impl MockResponse {
    /// Create a successful JSON response
    pub fn json<T: Serialize>(data: &T) -> Self {
        Self {
            body: serde_json::to_string(data).unwrap(),
            status: 200,
        }
    }

    /// Create a successful response with a raw body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status: 200,
        }
    }

    /// Create a failing response with the given status
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status,
        }
    }
}

/// A request recorded by [`MockHttpTransport`]
#[derive(Debug, Clone)]
pub enum RecordedRequest {
    /// JSON API request
    Json {
        /// HTTP method
        method: String,
        /// Request URL
        url: String,
        /// Request body
        body: Option<serde_json::Value>,
    },
    /// Raw PUT to storage
    Put {
        /// Request URL
        url: String,
        /// Content type of the body
        content_type: String,
        /// Body length in bytes
        body_len: usize,
    },
}

/// Mock HTTP transport with queued responses and recorded requests
#[derive(Default)]
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockHttpTransport {
    /// Create an empty mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub fn push_response(&self, response: MockResponse) {
        self.responses.lock().push_back(response);
    }

    /// All requests sent through this transport so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    fn next_response(&self) -> PinnacleResult<MockResponse> {
        self.responses.lock().pop_front().ok_or_else(|| {
            PinnacleError::Server {
                status: 500,
                message: "mock transport has no queued response".to_string(),
            }
        })
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send_json(&self, request: JsonRequest) -> PinnacleResult<serde_json::Value> {
        self.requests.lock().push(RecordedRequest::Json {
            method: request.method.to_string(),
            url: request.url,
            body: request.body,
        });

        let response = self.next_response()?;
        if !(200..300).contains(&response.status) {
            return Err(PinnacleError::from_status(response.status, &response.body));
        }
        serde_json::from_str(&response.body)
            .map_err(|e| PinnacleError::Response(e.into()))
    }

    async fn put_raw(&self, request: RawPutRequest) -> PinnacleResult<()> {
        self.requests.lock().push(RecordedRequest::Put {
            url: request.url,
            content_type: request.content_type,
            body_len: request.body.len(),
        });

        let response = self.next_response()?;
        if !(200..300).contains(&response.status) {
            return Err(PinnacleError::Server {
                status: response.status,
                message: format!("failed to upload file: {}", response.status),
            });
        }
        Ok(())
    }
}
