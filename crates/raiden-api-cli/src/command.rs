/*
[INPUT]:  Parsed subcommand and a configured client
[OUTPUT]: Pretty-printed JSON of the node's answer
[POS]:    Command layer - maps CLI subcommands onto client operations
[UPDATE]: When client operations are added or their arguments change
*/

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use raiden_api_client::{JoinNetworkParams, RaidenClient};
use serde::Serialize;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the node's account address
    Address,
    /// List channels, optionally narrowed to a token (and partner)
    Channels {
        #[arg(long)]
        token: Option<String>,
        #[arg(long, requires = "token")]
        partner: Option<String>,
    },
    /// Open a channel with an initial deposit
    OpenChannel {
        #[arg(long)]
        partner: String,
        #[arg(long)]
        token: String,
        #[arg(long)]
        total_deposit: u128,
        #[arg(long)]
        settle_timeout: u64,
    },
    /// Close a channel
    CloseChannel {
        #[arg(long)]
        token: String,
        #[arg(long)]
        partner: String,
    },
    /// Raise a channel's cumulative deposit
    Deposit {
        #[arg(long)]
        token: String,
        #[arg(long)]
        partner: String,
        #[arg(long)]
        total_deposit: u128,
    },
    /// Raise a channel's cumulative withdrawn amount
    Withdraw {
        #[arg(long)]
        token: String,
        #[arg(long)]
        partner: String,
        #[arg(long)]
        total_withdraw: u128,
    },
    /// List registered tokens, or show one token's network address
    Tokens {
        #[arg(long)]
        token: Option<String>,
    },
    /// Register a token
    RegisterToken {
        #[arg(long)]
        token: String,
    },
    /// List partners in a token network
    Partners {
        #[arg(long)]
        token: String,
    },
    /// List token network connections
    Connections,
    /// Join a token network
    Join {
        #[arg(long)]
        token: String,
        #[arg(long)]
        funds: u128,
        #[arg(long)]
        initial_channel_target: Option<u32>,
        #[arg(long)]
        joinable_funds_target: Option<f64>,
    },
    /// Leave a token network
    Leave {
        #[arg(long)]
        token: String,
    },
    /// List pending transfers, optionally narrowed to a token (and partner)
    PendingTransfers {
        #[arg(long)]
        token: Option<String>,
        #[arg(long, requires = "token")]
        partner: Option<String>,
    },
    /// Send a payment
    Pay {
        #[arg(long)]
        token: String,
        #[arg(long)]
        target: String,
        #[arg(long)]
        amount: u128,
        #[arg(long)]
        identifier: u64,
    },
    /// Show payment events with a target
    Events {
        #[arg(long)]
        token: String,
        #[arg(long)]
        target: String,
    },
}

impl Command {
    /// Run the command against the node; `None` means no content
    pub async fn run(&self, client: &RaidenClient) -> Result<Option<String>> {
        match self {
            Command::Address => to_json(client.get_client_address().await?),
            Command::Channels { token, partner } => match (token, partner) {
                (Some(token), Some(partner)) => {
                    to_json(client.get_channel_for_token_and_partner(token, partner).await?)
                }
                (Some(token), None) => to_json(client.get_channels_for_token(token).await?),
                (None, None) => to_json(client.get_channels().await?),
                (None, Some(_)) => bail!("--partner requires --token"),
            },
            Command::OpenChannel {
                partner,
                token,
                total_deposit,
                settle_timeout,
            } => to_json(
                client
                    .create_channel(partner, token, *total_deposit, *settle_timeout)
                    .await?,
            ),
            Command::CloseChannel { token, partner } => {
                to_json(client.close_channel(token, partner).await?)
            }
            Command::Deposit {
                token,
                partner,
                total_deposit,
            } => to_json(client.deposit_channel(token, partner, *total_deposit).await?),
            Command::Withdraw {
                token,
                partner,
                total_withdraw,
            } => to_json(client.withdraw_channel(token, partner, *total_withdraw).await?),
            Command::Tokens { token } => match token {
                Some(token) => to_json(client.get_token_network(token).await?),
                None => to_json(client.get_tokens().await?),
            },
            Command::RegisterToken { token } => to_json(client.register_token(token).await?),
            Command::Partners { token } => to_json(client.get_partners_for_token(token).await?),
            Command::Connections => to_json(client.get_connections().await?),
            Command::Join {
                token,
                funds,
                initial_channel_target,
                joinable_funds_target,
            } => {
                let params = JoinNetworkParams {
                    funds: *funds,
                    initial_channel_target: *initial_channel_target,
                    joinable_funds_target: *joinable_funds_target,
                };
                client.join_token_network(token, params).await?;
                Ok(None)
            }
            Command::Leave { token } => to_json(client.leave_token_network(token).await?),
            Command::PendingTransfers { token, partner } => match (token, partner) {
                (Some(token), Some(partner)) => to_json(
                    client
                        .get_pending_transfers_for_token_and_partner(token, partner)
                        .await?,
                ),
                (Some(token), None) => {
                    to_json(client.get_pending_transfers_for_token(token).await?)
                }
                (None, None) => to_json(client.get_pending_transfers().await?),
                (None, Some(_)) => bail!("--partner requires --token"),
            },
            Command::Pay {
                token,
                target,
                amount,
                identifier,
            } => to_json(
                client
                    .initiate_payment(token, target, *amount, *identifier)
                    .await?,
            ),
            Command::Events { token, target } => to_json(client.query_events(token, target).await?),
        }
    }
}

// Rendered without an intermediate `Value`, which cannot hold amounts above `u64::MAX`
fn to_json<T: Serialize>(value: T) -> Result<Option<String>> {
    serde_json::to_string_pretty(&value)
        .map(Some)
        .context("encode node response")
}
