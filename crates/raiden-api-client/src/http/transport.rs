/*
[INPUT]:  Resolved request (method, absolute URI, optional serialized JSON body)
[OUTPUT]: Status code plus fully buffered response body
[POS]:    HTTP layer - injectable network seam under the request executor
[UPDATE]: When adding transport options or alternative transports
*/

use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};

use crate::http::Result;

/// A single request as handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    pub uri: String,
    /// Serialized JSON document
    pub body: Option<Vec<u8>>,
}

/// A response with its body read to the end.
///
/// The body is kept as raw bytes so the executor can attempt a JSON parse
/// and still fall back to text without a second read from the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Network capability used by [`crate::RaidenClient`].
///
/// Implementations issue exactly one request per call.
#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already configured reqwest client
    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let mut builder = self.http_client.request(request.method, &request.uri);
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}
