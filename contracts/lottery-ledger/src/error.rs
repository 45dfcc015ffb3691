use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("stake {sent} is below minimum {min_stake}")]
    InsufficientStake { sent: Uint128, min_stake: Uint128 },

    #[error("must send {expected} denom, got {denom}")]
    WrongDenom { expected: String, denom: String },

    #[error("must send exactly one coin")]
    InvalidFunds,

    #[error("this call does not accept funds")]
    UnexpectedFunds,

    #[error("no participants in the current round")]
    NoParticipants,

    #[error("payout of {amount} to {winner} failed: {reason}")]
    TransferFailure {
        winner: String,
        amount: String,
        reason: String,
    },

    #[error("randomness beacon unavailable: {reason}")]
    BeaconUnavailable { reason: String },

    #[error("minimum stake must be greater than zero")]
    InvalidMinStake,

    #[error("invalid denom: {denom}")]
    InvalidDenom { denom: String },

    #[error("unknown reply id {id}")]
    UnknownReplyId { id: u64 },
}
