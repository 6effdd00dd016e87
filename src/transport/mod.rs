//! HTTP transport layer for the Pinnacle client.
//!
//! Provides low-level HTTP communication with the Pinnacle API, including
//! request building, response parsing, and error mapping. Non-2xx status
//! codes are wrapped into typed errors by status.

use crate::errors::{NetworkError, PinnacleError, PinnacleResult, ResponseError};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;
use tracing::debug;

/// HTTP transport trait for making API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a JSON request and receive the decoded JSON response
    async fn send_json(&self, request: JsonRequest) -> PinnacleResult<serde_json::Value>;

    /// PUT raw bytes to an absolute URL, e.g. a presigned storage URL
    async fn put_raw(&self, request: RawPutRequest) -> PinnacleResult<()>;
}

/// Transport request for JSON payloads
#[derive(Debug)]
pub struct JsonRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<serde_json::Value>,
    /// Per-request timeout override
    pub timeout: Option<Duration>,
}

impl JsonRequest {
    /// Create a new GET request
    pub fn get(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers,
            body: None,
            timeout: None,
        }
    }

    /// Create a new POST request
    pub fn post(url: impl Into<String>, headers: HeaderMap, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            body: Some(body),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Raw PUT request used for presigned uploads
#[derive(Debug, Clone)]
pub struct RawPutRequest {
    /// Absolute URL, usually presigned
    pub url: String,
    /// Content type of the body
    pub content_type: String,
    /// Body bytes
    pub body: Bytes,
}

impl RawPutRequest {
    /// Create a new raw PUT request
    pub fn new(
        url: impl Into<String>,
        content_type: impl Into<String>,
        body: impl Into<Bytes>,
    ) -> Self {
        Self {
            url: url.into(),
            content_type: content_type.into(),
            body: body.into(),
        }
    }
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> PinnacleResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| PinnacleError::Network(NetworkError::Http(e.to_string())))?;

        Ok(Self { client })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn parse_response(&self, response: Response) -> PinnacleResult<serde_json::Value> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PinnacleError::Network(NetworkError::Http(e.to_string())))?;

        debug!(status = status.as_u16(), "Received API response");

        if !status.is_success() {
            return Err(PinnacleError::from_status(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| PinnacleError::Response(ResponseError::from(e)))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send_json(&self, request: JsonRequest) -> PinnacleResult<serde_json::Value> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        self.parse_response(response).await
    }

    async fn put_raw(&self, request: RawPutRequest) -> PinnacleResult<()> {
        let response = self
            .client
            .put(&request.url)
            .header(http::header::CONTENT_TYPE, &request.content_type)
            .body(request.body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Storage providers do not return Pinnacle error bodies, so the
            // status alone is reported.
            return Err(PinnacleError::Server {
                status: status.as_u16(),
                message: format!("failed to upload file: {}", status.as_u16()),
            });
        }

        debug!(url = %request.url, "Uploaded file to storage");
        Ok(())
    }
}
