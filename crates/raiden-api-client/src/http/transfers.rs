/*
[INPUT]:  Optional token and partner addresses
[OUTPUT]: Pending (in-flight) transfers
[POS]:    HTTP layer - pending transfer queries
[UPDATE]: When adding transfer filters
*/

use crate::http::request::{ApiRequest, require_non_empty};
use crate::http::{RaidenClient, Result};
use crate::types::Transfer;

impl RaidenClient {
    /// GET /pending_transfers
    pub async fn get_pending_transfers(&self) -> Result<Vec<Transfer>> {
        self.execute_json(ApiRequest::get("pending_transfers")).await
    }

    /// GET /pending_transfers/{token_address}
    pub async fn get_pending_transfers_for_token(&self, token_address: &str) -> Result<Vec<Transfer>> {
        require_non_empty("token_address", token_address)?;
        self.execute_json(ApiRequest::get(format!("pending_transfers/{token_address}")))
            .await
    }

    /// GET /pending_transfers/{token_address}/{partner_address}
    pub async fn get_pending_transfers_for_token_and_partner(
        &self,
        token_address: &str,
        partner_address: &str,
    ) -> Result<Vec<Transfer>> {
        require_non_empty("token_address", token_address)?;
        require_non_empty("partner_address", partner_address)?;
        self.execute_json(ApiRequest::get(format!(
            "pending_transfers/{token_address}/{partner_address}"
        )))
        .await
    }
}
