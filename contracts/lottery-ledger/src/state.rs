use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};
use lottery_common::types::RandomnessSource;

pub const CONFIG: Item<LedgerConfig> = Item::new("config");
pub const LEDGER_STATE: Item<LedgerState> = Item::new("ledger_state");
/// Participants of the current round keyed by entry index, `0..entries`.
/// Cleared when the round is drawn.
pub const PLAYERS: Map<u64, Addr> = Map::new("players");
/// Completed draws keyed by round number
pub const DRAWS: Map<u64, DrawRecord> = Map::new("draws");

/// Per-winner totals across all rounds
pub const PLAYER_WIN_COUNT: Map<&Addr, u32> = Map::new("player_win_count");
pub const PLAYER_TOTAL_WON: Map<&Addr, Uint128> = Map::new("player_total_won");

/// Fixed at instantiation.
#[cw_serde]
pub struct LedgerConfig {
    pub manager: Addr,
    /// Native denom accepted as stake and paid out as prize
    pub denom: String,
    /// Smallest stake accepted by `enter`
    pub min_stake: Uint128,
    pub randomness: RandomnessSource,
}

#[cw_serde]
pub struct LedgerState {
    /// Number of the round currently accepting entries
    pub round: u64,
    /// Entries in the current round, also the next free `PLAYERS` index
    pub entries: u64,
    /// Sum of every stake received since the last draw
    pub pool: Uint128,
    pub total_draws: u64,
    pub total_paid_out: Uint128,
}

#[cw_serde]
pub struct DrawRecord {
    pub round: u64,
    pub winner: Addr,
    pub winner_index: u64,
    pub prize: Uint128,
    pub denom: String,
    pub entries: u64,
    /// Seed the winner index was derived from, hex-encoded
    pub seed: String,
    /// Oracle round mixed into the seed, if any
    pub beacon_round: Option<u64>,
    pub drawn_at: Timestamp,
}
