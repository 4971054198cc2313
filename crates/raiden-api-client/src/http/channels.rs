/*
[INPUT]:  Token and partner addresses, deposit/withdraw amounts, settle timeout
[OUTPUT]: Channel snapshots
[POS]:    HTTP layer - channel lifecycle endpoints
[UPDATE]: When adding channel endpoints or changing patch semantics
*/

use reqwest::StatusCode;

use crate::http::request::{ApiRequest, require_non_empty, require_positive};
use crate::http::{RaidenClient, Result};
use crate::types::{Channel, ChannelPatchRequest, CreateChannelRequest};

impl RaidenClient {
    /// List all unsettled channels
    ///
    /// GET /channels
    pub async fn get_channels(&self) -> Result<Vec<Channel>> {
        self.execute_json(ApiRequest::get("channels")).await
    }

    /// List channels in one token network
    ///
    /// GET /channels/{token_address}
    pub async fn get_channels_for_token(&self, token_address: &str) -> Result<Vec<Channel>> {
        require_non_empty("token_address", token_address)?;
        self.execute_json(ApiRequest::get(format!("channels/{token_address}")))
            .await
    }

    /// Query the channel with a partner in one token network
    ///
    /// GET /channels/{token_address}/{partner_address}
    pub async fn get_channel_for_token_and_partner(
        &self,
        token_address: &str,
        partner_address: &str,
    ) -> Result<Channel> {
        require_non_empty("token_address", token_address)?;
        require_non_empty("partner_address", partner_address)?;
        self.execute_json(ApiRequest::get(channel_path(token_address, partner_address)))
            .await
    }

    /// Open a channel and make the initial deposit
    ///
    /// PUT /channels -> 201
    pub async fn create_channel(
        &self,
        partner_address: &str,
        token_address: &str,
        total_deposit: u128,
        settle_timeout: u64,
    ) -> Result<Channel> {
        require_non_empty("partner_address", partner_address)?;
        require_non_empty("token_address", token_address)?;
        require_positive("total_deposit", total_deposit)?;
        require_positive("settle_timeout", settle_timeout)?;

        let body = CreateChannelRequest {
            partner_address: partner_address.to_string(),
            token_address: token_address.to_string(),
            total_deposit,
            settle_timeout,
        };
        let request = ApiRequest::put("channels")
            .expect(StatusCode::CREATED)
            .json(&body)?;
        self.execute_json(request).await
    }

    /// Close the channel with a partner
    ///
    /// PATCH /channels/{token_address}/{partner_address} {"state": "closed"}
    pub async fn close_channel(&self, token_address: &str, partner_address: &str) -> Result<Channel> {
        require_non_empty("token_address", token_address)?;
        require_non_empty("partner_address", partner_address)?;
        self.patch_channel(token_address, partner_address, &ChannelPatchRequest::close())
            .await
    }

    /// Raise the cumulative deposit of a channel
    ///
    /// PATCH /channels/{token_address}/{partner_address} {"total_deposit": ..}
    pub async fn deposit_channel(
        &self,
        token_address: &str,
        partner_address: &str,
        total_deposit: u128,
    ) -> Result<Channel> {
        require_non_empty("token_address", token_address)?;
        require_non_empty("partner_address", partner_address)?;
        require_positive("total_deposit", total_deposit)?;
        self.patch_channel(
            token_address,
            partner_address,
            &ChannelPatchRequest::deposit(total_deposit),
        )
        .await
    }

    /// Raise the cumulative withdrawn amount of a channel
    ///
    /// PATCH /channels/{token_address}/{partner_address} {"total_withdraw": ..}
    pub async fn withdraw_channel(
        &self,
        token_address: &str,
        partner_address: &str,
        total_withdraw: u128,
    ) -> Result<Channel> {
        require_non_empty("token_address", token_address)?;
        require_non_empty("partner_address", partner_address)?;
        require_positive("total_withdraw", total_withdraw)?;
        self.patch_channel(
            token_address,
            partner_address,
            &ChannelPatchRequest::withdraw(total_withdraw),
        )
        .await
    }

    async fn patch_channel(
        &self,
        token_address: &str,
        partner_address: &str,
        patch: &ChannelPatchRequest,
    ) -> Result<Channel> {
        let request = ApiRequest::patch(channel_path(token_address, partner_address)).json(patch)?;
        self.execute_json(request).await
    }
}

fn channel_path(token_address: &str, partner_address: &str) -> String {
    format!("channels/{token_address}/{partner_address}")
}
