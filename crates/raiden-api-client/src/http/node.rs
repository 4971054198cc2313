/*
[INPUT]:  None
[OUTPUT]: Node identity (account address)
[POS]:    HTTP layer - node endpoints
[UPDATE]: When adding node-level endpoints
*/

use crate::http::request::ApiRequest;
use crate::http::{RaidenClient, Result};
use crate::types::Address;

impl RaidenClient {
    /// Query the node's own account address
    ///
    /// GET /address
    pub async fn get_client_address(&self) -> Result<Address> {
        self.execute_json(ApiRequest::get("address")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{RaidenClient, RaidenError};
    use crate::types::Address;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_client_address() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/address"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "our_address": "0x123" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = RaidenClient::new(&format!("{}/api", server.uri()), "v1").expect("client init");
        let response = client.get_client_address().await.expect("get_client_address failed");

        assert_eq!(
            response,
            Address {
                our_address: "0x123".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_get_client_address_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/address"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = RaidenClient::new(&format!("{}/api", server.uri()), "v1").expect("client init");
        let err = client.get_client_address().await.expect_err("empty body");
        assert!(matches!(err, RaidenError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_invalid_api_version() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v0/address"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = RaidenClient::new(&format!("{}/api", server.uri()), "v0").expect("client init");
        let err = client.get_client_address().await.expect_err("404");
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("invalid response: 404"));
    }
}
