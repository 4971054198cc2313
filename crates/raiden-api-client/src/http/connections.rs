/*
[INPUT]:  Token addresses and join parameters (funds, targets)
[OUTPUT]: Connection summaries, closed channel addresses
[POS]:    HTTP layer - token network join/leave endpoints
[UPDATE]: When adding connection endpoints or join options
*/

use reqwest::StatusCode;

use crate::http::request::{ApiRequest, require_non_empty, require_positive};
use crate::http::{RaidenClient, RaidenError, Result};
use crate::types::{Connection, JoinNetworkParams, JoinNetworkRequest};

impl RaidenClient {
    /// List this node's connections to token networks
    ///
    /// GET /connections
    pub async fn get_connections(&self) -> Result<Vec<Connection>> {
        self.execute_json(ApiRequest::get("connections")).await
    }

    /// Join a token network, opening channels with the committed funds
    ///
    /// PUT /connections/{token_address} -> 204
    pub async fn join_token_network(
        &self,
        token_address: &str,
        params: JoinNetworkParams,
    ) -> Result<()> {
        require_non_empty("token_address", token_address)?;
        require_positive("funds", params.funds)?;
        if let Some(target) = params.joinable_funds_target {
            if !(0.0..=1.0).contains(&target) {
                return Err(RaidenError::invalid_argument(
                    "joinable_funds_target",
                    "must be between 0.0 and 1.0",
                ));
            }
        }

        let request = ApiRequest::put(format!("connections/{token_address}"))
            .expect(StatusCode::NO_CONTENT)
            .json(&JoinNetworkRequest::from(params))?;
        self.execute_empty(request).await
    }

    /// Leave a token network, closing all its channels
    ///
    /// DELETE /connections/{token_address}
    pub async fn leave_token_network(&self, token_address: &str) -> Result<Vec<String>> {
        require_non_empty("token_address", token_address)?;
        self.execute_json(ApiRequest::delete(format!("connections/{token_address}")))
            .await
    }
}
