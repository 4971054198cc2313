/*
[INPUT]:  Node API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - read-only response snapshots
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::{ChannelState, TransferRole};

// Token amounts are counted in the token's smallest unit and routinely
// exceed `u64::MAX` for 18-decimal tokens.

/// Account address of the queried node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub our_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub token_network_address: String,
    pub channel_identifier: u64,
    pub partner_address: String,
    pub token_address: String,
    pub balance: u128,
    pub total_deposit: u128,
    #[serde(default)]
    pub total_withdraw: u128,
    pub state: ChannelState,
    pub settle_timeout: u64,
    pub reveal_timeout: u64,
}

/// Result of a token registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub token_network_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub funds: u128,
    pub sum_deposits: u128,
    pub channels: u64,
}

/// In-flight transfer not yet finalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub channel_identifier: u64,
    pub initiator: String,
    pub locked_amount: u128,
    pub payment_identifier: u64,
    pub role: TransferRole,
    pub target: String,
    pub token_address: String,
    pub token_network_address: String,
    pub transferred_amount: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub initiator_address: String,
    pub target_address: String,
    pub token_address: String,
    pub amount: u128,
    pub identifier: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event: String,
    pub amount: u128,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiator: Option<String>,
    pub identifier: u64,
    pub log_time: String,
}

/// Partner with an open channel in a token network, keyed by address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub partner_address: String,
    /// Resource path of the channel with this partner
    pub channel: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_deserialize() {
        let json = r#"{
            "token_network_address": "0x02",
            "channel_identifier": 1,
            "partner_address": "0x01",
            "token_address": "0x02",
            "balance": 100,
            "total_deposit": 100,
            "total_withdraw": 0,
            "state": "opened",
            "settle_timeout": 200,
            "reveal_timeout": 0
        }"#;

        let channel: Channel = serde_json::from_str(json).expect("channel");
        assert_eq!(channel.channel_identifier, 1);
        assert_eq!(channel.total_deposit, 100);
        assert_eq!(channel.settle_timeout, 200);
        assert_eq!(channel.state, ChannelState::Opened);
    }

    #[test]
    fn test_channel_wei_scale_amounts() {
        let json = r#"{
            "token_network_address": "0x02",
            "channel_identifier": 7,
            "partner_address": "0x01",
            "token_address": "0x02",
            "balance": 20000000000000000000,
            "total_deposit": 25000000000000000000,
            "total_withdraw": 5000000000000000000,
            "state": "opened",
            "settle_timeout": 500,
            "reveal_timeout": 50
        }"#;

        let channel: Channel = serde_json::from_str(json).expect("channel");
        assert_eq!(channel.balance, 20_000_000_000_000_000_000);
        assert_eq!(channel.total_deposit, 25_000_000_000_000_000_000);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let json = r#"{
            "initiator_address": "0x00",
            "target_address": "0x02",
            "token_address": "0x01",
            "amount": -5,
            "identifier": 1
        }"#;

        assert!(serde_json::from_str::<Payment>(json).is_err());
    }

    #[test]
    fn test_event_without_initiator() {
        let json = r#"{
            "event": "EventPaymentSentSuccess",
            "amount": 20,
            "identifier": 7,
            "log_time": "2019-01-01T00:00:00.000000"
        }"#;

        let event: Event = serde_json::from_str(json).expect("event");
        assert_eq!(event.initiator, None);
        assert_eq!(event.amount, 20);
    }
}
