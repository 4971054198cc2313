/*
[INPUT]:  Node API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - JSON bodies for mutating endpoints
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::ChannelState;

/// Body of `PUT /channels`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChannelRequest {
    pub partner_address: String,
    pub token_address: String,
    pub total_deposit: u128,
    pub settle_timeout: u64,
}

/// Body of `PATCH /channels/{token}/{partner}`; exactly one field is set per call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelPatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ChannelState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_deposit: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_withdraw: Option<u128>,
}

impl ChannelPatchRequest {
    pub fn close() -> Self {
        Self {
            state: Some(ChannelState::Closed),
            ..Self::default()
        }
    }

    pub fn deposit(total_deposit: u128) -> Self {
        Self {
            total_deposit: Some(total_deposit),
            ..Self::default()
        }
    }

    pub fn withdraw(total_withdraw: u128) -> Self {
        Self {
            total_withdraw: Some(total_withdraw),
            ..Self::default()
        }
    }
}

/// Caller-facing arguments for joining a token network
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JoinNetworkParams {
    pub funds: u128,
    pub initial_channel_target: Option<u32>,
    /// Fraction of funds kept joinable for new partners, `0.0..=1.0`
    pub joinable_funds_target: Option<f64>,
}

impl JoinNetworkParams {
    pub fn new(funds: u128) -> Self {
        Self {
            funds,
            ..Self::default()
        }
    }

    pub fn with_initial_channel_target(mut self, target: u32) -> Self {
        self.initial_channel_target = Some(target);
        self
    }

    pub fn with_joinable_funds_target(mut self, target: f64) -> Self {
        self.joinable_funds_target = Some(target);
        self
    }
}

/// Body of `PUT /connections/{token}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinNetworkRequest {
    pub funds: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_channel_target: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joinable_funds_target: Option<f64>,
}

impl From<JoinNetworkParams> for JoinNetworkRequest {
    fn from(params: JoinNetworkParams) -> Self {
        Self {
            funds: params.funds,
            initial_channel_target: params.initial_channel_target,
            joinable_funds_target: params.joinable_funds_target,
        }
    }
}

/// Body of `POST /payments/{token}/{target}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: u128,
    pub identifier: u64,
}
