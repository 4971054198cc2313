/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for raiden-api-client tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use raiden_api_client::{
    ClientConfig, HttpTransport, RaidenClient, Result, TransportRequest, TransportResponse,
};
use reqwest::StatusCode;
use wiremock::MockServer;

pub const BASE_URL: &str = "http://localhost:5001/api";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at `{server}/api/v1`
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> RaidenClient {
    RaidenClient::new(&format!("{}/api", server.uri()), "v1").expect("client init")
}

/// Transport that answers every request with the same canned response and counts calls
#[derive(Debug)]
pub struct CountingTransport {
    calls: AtomicUsize,
    status: StatusCode,
    body: Vec<u8>,
}

impl CountingTransport {
    pub fn new(status: StatusCode, body: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            status,
            body: body.to_vec(),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for CountingTransport {
    async fn send(&self, _request: TransportRequest) -> Result<TransportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(TransportResponse::new(self.status, self.body.clone()))
    }
}

/// Client wired to a counting transport
pub fn counting_client(transport: Arc<CountingTransport>) -> RaidenClient {
    RaidenClient::with_transport(ClientConfig::new(BASE_URL), transport).expect("client init")
}
