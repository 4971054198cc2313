/*
[INPUT]:  Token addresses
[OUTPUT]: Registered tokens, token network addresses, partners
[POS]:    HTTP layer - token registry endpoints
[UPDATE]: When adding token endpoints
*/

use reqwest::StatusCode;

use crate::http::request::{ApiRequest, require_non_empty};
use crate::http::{RaidenClient, Result};
use crate::types::{Partner, Token};

impl RaidenClient {
    /// List addresses of all registered tokens
    ///
    /// GET /tokens
    pub async fn get_tokens(&self) -> Result<Vec<String>> {
        self.execute_json(ApiRequest::get("tokens")).await
    }

    /// Register a token and create its token network
    ///
    /// PUT /tokens/{token_address} -> 201
    pub async fn register_token(&self, token_address: &str) -> Result<Token> {
        require_non_empty("token_address", token_address)?;
        let request = ApiRequest::put(format!("tokens/{token_address}")).expect(StatusCode::CREATED);
        self.execute_json(request).await
    }

    /// Query the token network address of a registered token.
    ///
    /// The node may answer with a bare string instead of a JSON document.
    ///
    /// GET /tokens/{token_address}
    pub async fn get_token_network(&self, token_address: &str) -> Result<String> {
        require_non_empty("token_address", token_address)?;
        let body = self
            .execute(ApiRequest::get(format!("tokens/{token_address}")))
            .await?;
        Ok(body.into_text())
    }

    /// List partners with a channel in a token network
    ///
    /// GET /tokens/{token_address}/partners
    pub async fn get_partners_for_token(&self, token_address: &str) -> Result<Vec<Partner>> {
        require_non_empty("token_address", token_address)?;
        self.execute_json(ApiRequest::get(format!("tokens/{token_address}/partners")))
            .await
    }
}
