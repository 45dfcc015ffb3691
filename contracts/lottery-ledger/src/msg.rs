use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::{DrawRecord, LedgerConfig, LedgerState};

#[cw_serde]
#[derive(Default)]
pub struct InstantiateMsg {
    /// Stake denom, defaults to "inj"
    pub denom: Option<String>,
    /// Minimum stake in base units, defaults to 0.01 of an 18-decimal token
    pub min_stake: Option<Uint128>,
    /// Drand oracle contract to mix into the draw seed. When unset the draw
    /// uses block entropy only.
    pub randomness_oracle: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Join the current round. Stake is the attached funds.
    Enter {},
    /// Draw a winner and pay out the pool. Manager only.
    PickWinner {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Entries of the current round in entry order, paginated by entry index
    #[returns(PlayersResponse)]
    Players {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(Addr)]
    Manager {},
    #[returns(PoolBalanceResponse)]
    PoolBalance {},
    #[returns(LedgerConfig)]
    Config {},
    #[returns(LedgerState)]
    State {},
    #[returns(Option<DrawRecord>)]
    Draw { round: u64 },
    #[returns(DrawHistoryResponse)]
    DrawHistory {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(PlayerWinsResponse)]
    PlayerWins { address: String },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct PlayersResponse {
    pub players: Vec<Addr>,
    /// Total entries in the round, not just this page
    pub count: u64,
}

#[cw_serde]
pub struct PoolBalanceResponse {
    pub denom: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct DrawHistoryResponse {
    pub draws: Vec<DrawRecord>,
}

#[cw_serde]
pub struct PlayerWinsResponse {
    pub address: String,
    pub total_wins: u32,
    pub total_won: Uint128,
}

/// Carried on the payout submessage so a failed transfer can be reported.
#[cw_serde]
pub struct PayoutPayload {
    pub round: u64,
    pub winner: String,
    pub amount: Uint128,
}
