#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult, Uint128};
use cw2::{get_contract_version, set_contract_version};
use lottery_common::types::RandomnessSource;

use crate::error::ContractError;
use crate::execute::{self, PAYOUT_REPLY_ID};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{LedgerConfig, LedgerState, CONFIG, LEDGER_STATE};

const CONTRACT_NAME: &str = "crates.io:lottery-ledger";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_DENOM: &str = "inj";
/// 0.01 of an 18-decimal token
pub const DEFAULT_MIN_STAKE: Uint128 = Uint128::new(10_000_000_000_000_000u128);

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // Funds sent here would sit outside the pool
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }

    let denom = msg.denom.unwrap_or_else(|| DEFAULT_DENOM.to_string());
    if denom.trim().is_empty() {
        return Err(ContractError::InvalidDenom { denom });
    }

    let min_stake = msg.min_stake.unwrap_or(DEFAULT_MIN_STAKE);
    if min_stake.is_zero() {
        return Err(ContractError::InvalidMinStake);
    }

    let randomness = match msg.randomness_oracle {
        Some(oracle) => RandomnessSource::Oracle {
            contract: deps.api.addr_validate(&oracle)?,
        },
        None => RandomnessSource::BlockEntropy,
    };

    let config = LedgerConfig {
        manager: info.sender.clone(),
        denom,
        min_stake,
        randomness,
    };
    CONFIG.save(deps.storage, &config)?;

    let state = LedgerState {
        round: 0,
        entries: 0,
        pool: Uint128::zero(),
        total_draws: 0,
        total_paid_out: Uint128::zero(),
    };
    LEDGER_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "lottery-ledger")
        .add_attribute("manager", info.sender.to_string())
        .add_attribute("denom", config.denom)
        .add_attribute("min_stake", config.min_stake.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => execute::enter(deps, env, info),
        ExecuteMsg::PickWinner {} => execute::pick_winner(deps, env, info),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Players { start_after, limit } => {
            query::query_players(deps, start_after, limit)
        }
        QueryMsg::Manager {} => query::query_manager(deps),
        QueryMsg::PoolBalance {} => query::query_pool_balance(deps),
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::State {} => query::query_state(deps),
        QueryMsg::Draw { round } => query::query_draw(deps, round),
        QueryMsg::DrawHistory { start_after, limit } => {
            query::query_draw_history(deps, start_after, limit)
        }
        QueryMsg::PlayerWins { address } => query::query_player_wins(deps, address),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        PAYOUT_REPLY_ID => execute::payout_reply(deps, env, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "cannot migrate from a different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
