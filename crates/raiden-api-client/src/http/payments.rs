/*
[INPUT]:  Token and target addresses, amount, payment identifier
[OUTPUT]: Payment confirmation and payment event history
[POS]:    HTTP layer - payment endpoints
[UPDATE]: When adding payment options or event filters
*/

use crate::http::request::{ApiRequest, require_non_empty, require_positive};
use crate::http::{RaidenClient, Result};
use crate::types::{Event, Payment, PaymentRequest};

impl RaidenClient {
    /// Send a payment to a target through the token network
    ///
    /// POST /payments/{token_address}/{target_address}
    pub async fn initiate_payment(
        &self,
        token_address: &str,
        target_address: &str,
        amount: u128,
        identifier: u64,
    ) -> Result<Payment> {
        require_non_empty("token_address", token_address)?;
        require_non_empty("target_address", target_address)?;
        require_positive("amount", amount)?;
        require_positive("identifier", identifier)?;

        let request = ApiRequest::post(payment_path(token_address, target_address))
            .json(&PaymentRequest { amount, identifier })?;
        self.execute_json(request).await
    }

    /// Query payment events exchanged with a target
    ///
    /// GET /payments/{token_address}/{target_address}
    pub async fn query_events(&self, token_address: &str, target_address: &str) -> Result<Vec<Event>> {
        require_non_empty("token_address", token_address)?;
        require_non_empty("target_address", target_address)?;
        self.execute_json(ApiRequest::get(payment_path(token_address, target_address)))
            .await
    }
}

fn payment_path(token_address: &str, target_address: &str) -> String {
    format!("payments/{token_address}/{target_address}")
}

#[cfg(test)]
mod tests {
    use crate::http::RaidenClient;
    use crate::types::Payment;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> RaidenClient {
        RaidenClient::new(&format!("{}/api", server.uri()), "v1").expect("client init")
    }

    #[tokio::test]
    async fn test_initiate_payment() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/payments/0x01/0x02"))
            .and(body_json(json!({ "amount": 100, "identifier": 1 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "initiator_address": "0x",
                "target_address": "0x02",
                "token_address": "0x01",
                "amount": 100,
                "identifier": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let payment = client_for(&server)
            .initiate_payment("0x01", "0x02", 100, 1)
            .await
            .expect("initiate_payment failed");
        assert_eq!(
            payment,
            Payment {
                initiator_address: "0x".to_string(),
                target_address: "0x02".to_string(),
                token_address: "0x01".to_string(),
                amount: 100,
                identifier: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_query_events() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/payments/0x01/0x02"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "event": "EventPaymentReceivedSuccess",
                "amount": 5,
                "initiator": "0x02",
                "identifier": 1,
                "log_time": "2018-10-30T07:04:22.293000"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let events = client_for(&server)
            .query_events("0x01", "0x02")
            .await
            .expect("query_events failed");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, "EventPaymentReceivedSuccess");
        assert_eq!(events[0].initiator.as_deref(), Some("0x02"));
    }

    #[tokio::test]
    async fn test_query_events_twice_is_stable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/payments/0x01/0x02"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let first = client.query_events("0x01", "0x02").await.expect("first");
        let second = client.query_events("0x01", "0x02").await.expect("second");
        assert_eq!(first, second);
    }
}
