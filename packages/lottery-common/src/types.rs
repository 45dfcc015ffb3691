use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

/// Where a draw takes its randomness from.
#[cw_serde]
pub enum RandomnessSource {
    /// Hash of block data, the sender and the round. Cheap but manipulable by
    /// block producers and by the manager's choice of timing.
    BlockEntropy,
    /// Block seed mixed with the latest beacon of a drand oracle contract.
    Oracle { contract: Addr },
}

/// Query interface of the drand oracle contract.
#[cw_serde]
pub enum OracleQueryMsg {
    LatestRound {},
    Beacon { round: u64 },
}

/// Beacon as stored by the oracle contract.
#[cw_serde]
pub struct BeaconResponse {
    pub round: u64,
    /// sha256(signature), 32 bytes
    pub randomness: Vec<u8>,
    pub signature: Vec<u8>,
    pub verified: bool,
}
