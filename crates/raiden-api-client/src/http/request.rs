/*
[INPUT]:  Request descriptors built by the endpoint methods
[OUTPUT]: Decoded response bodies or typed results
[POS]:    HTTP layer - argument validation and the single request executor
[UPDATE]: When changing status handling or body decoding
*/

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::transport::TransportRequest;
use crate::http::{RaidenClient, RaidenError, Result};
use crate::types::ResponseBody;

/// Description of one API call: verb, path below the root, expected status, body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub expected_status: StatusCode,
    /// Serialized JSON body
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            expected_status: StatusCode::OK,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Status the node must answer with for the call to succeed
    pub fn expect(mut self, status: StatusCode) -> Self {
        self.expected_status = status;
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }
}

/// Reject an empty required string argument
pub fn require_non_empty(parameter: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RaidenError::invalid_argument(parameter, "must not be empty"));
    }
    Ok(())
}

/// Reject a zero required amount, identifier or timeout
pub fn require_positive<T>(parameter: &'static str, value: T) -> Result<()>
where
    T: PartialOrd + Default,
{
    if value <= T::default() {
        return Err(RaidenError::invalid_argument(
            parameter,
            "must be greater than zero",
        ));
    }
    Ok(())
}

/// Body of a response whose status matched, with the URI it came from
struct DispatchedResponse {
    uri: String,
    body: Vec<u8>,
}

impl RaidenClient {
    /// Send a request and decode its body.
    ///
    /// Exactly one transport call is made. A status other than the expected
    /// one fails with [`RaidenError::UnexpectedStatus`].
    pub async fn execute(&self, request: ApiRequest) -> Result<ResponseBody> {
        let DispatchedResponse { uri, body } = self.dispatch(request).await?;
        let body = ResponseBody::decode(&body).ok_or_else(|| RaidenError::Decode {
            uri: uri.clone(),
            reason: "body is neither JSON nor UTF-8 text".to_string(),
        })?;
        tracing::debug!(uri = %uri, json = body.is_json(), "node response decoded");
        Ok(body)
    }

    /// Send a request and decode the body straight into `T`
    pub async fn execute_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let DispatchedResponse { uri, body } = self.dispatch(request).await?;
        ResponseBody::decode_as(&body).map_err(|reason| RaidenError::Decode { uri, reason })
    }

    /// Send a request whose success carries no meaningful body
    pub async fn execute_empty(&self, request: ApiRequest) -> Result<()> {
        self.dispatch(request).await.map(|_| ())
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<DispatchedResponse> {
        let uri = self.resource_uri(&request.path);
        let expected = request.expected_status;
        tracing::debug!(
            method = %request.method,
            uri = %uri,
            expected_status = expected.as_u16(),
            "dispatching node request"
        );

        let response = self
            .transport()
            .send(TransportRequest {
                method: request.method,
                uri: uri.clone(),
                body: request.body,
            })
            .await?;

        if response.status != expected {
            let body = String::from_utf8_lossy(&response.body).into_owned();
            tracing::warn!(
                status = response.status.as_u16(),
                expected_status = expected.as_u16(),
                uri = %uri,
                "unexpected node response status"
            );
            return Err(RaidenError::UnexpectedStatus {
                status: response.status.as_u16(),
                expected: expected.as_u16(),
                uri,
                body,
            });
        }

        Ok(DispatchedResponse {
            uri,
            body: response.body,
        })
    }
}
