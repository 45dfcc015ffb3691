use cosmwasm_std::{
    coins, from_json, to_json_binary, BankMsg, Coin, DepsMut, Env, Event, MessageInfo, Reply,
    Response, SubMsg, SubMsgResult, Uint128,
};
use lottery_common::entropy::select_index;

use crate::error::ContractError;
use crate::msg::PayoutPayload;
use crate::randomness::{draw_seed, DrawSeed};
use crate::state::{
    DrawRecord, LedgerConfig, CONFIG, DRAWS, LEDGER_STATE, PLAYERS, PLAYER_TOTAL_WON,
    PLAYER_WIN_COUNT,
};

/// Reply id of the prize transfer submessage
pub const PAYOUT_REPLY_ID: u64 = 1;

/// Check the attached funds and return the stake amount.
fn validate_stake(config: &LedgerConfig, funds: &[Coin]) -> Result<Uint128, ContractError> {
    let sent = match funds {
        [] => {
            return Err(ContractError::InsufficientStake {
                sent: Uint128::zero(),
                min_stake: config.min_stake,
            })
        }
        [coin] => coin,
        _ => return Err(ContractError::InvalidFunds),
    };

    if sent.denom != config.denom {
        return Err(ContractError::WrongDenom {
            expected: config.denom.clone(),
            denom: sent.denom.clone(),
        });
    }
    if sent.amount < config.min_stake {
        return Err(ContractError::InsufficientStake {
            sent: sent.amount,
            min_stake: config.min_stake,
        });
    }

    Ok(sent.amount)
}

/// Enter the current round. Anyone can call, any number of times.
/// Each call appends one entry and adds its stake to the pool.
pub fn enter(deps: DepsMut, _env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let stake = validate_stake(&config, &info.funds)?;

    let mut state = LEDGER_STATE.load(deps.storage)?;
    state.pool = state.pool.checked_add(stake)?;
    PLAYERS.save(deps.storage, state.entries, &info.sender)?;
    state.entries += 1;

    LEDGER_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("action", "enter")
        .add_attribute("player", info.sender.to_string())
        .add_attribute("stake", stake.to_string())
        .add_event(
            Event::new("lottery_entered")
                .add_attribute("round", state.round.to_string())
                .add_attribute("player", info.sender.to_string())
                .add_attribute("stake", stake.to_string())
                .add_attribute("entries", state.entries.to_string())
                .add_attribute("pool", state.pool.to_string()),
        ))
}

/// Draw a winner and pay out the whole pool. Manager only.
///
/// 1. Derive the draw seed (see `randomness::draw_seed`)
/// 2. winner_index = uint128(seed[0..16]) % entries
/// 3. Record the draw, clear the players and zero the pool
/// 4. Send the prize to the winner
///
/// The transfer is a reply-on-error submessage. If it fails, `reply` turns
/// the failure into `TransferFailure`, which aborts the transaction and
/// reverts steps 3 and 4 together.
pub fn pick_winner(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.manager {
        return Err(ContractError::Unauthorized {
            reason: "only the manager can pick a winner".to_string(),
        });
    }
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }

    let mut state = LEDGER_STATE.load(deps.storage)?;
    let entries = state.entries;
    if entries == 0 {
        return Err(ContractError::NoParticipants);
    }

    let DrawSeed { seed, beacon_round } = draw_seed(
        deps.as_ref(),
        &env,
        &info.sender,
        &config.randomness,
        state.round,
        entries,
    )?;
    let winner_index =
        select_index(&seed, entries as usize).ok_or(ContractError::NoParticipants)?;
    let winner = PLAYERS.load(deps.storage, winner_index as u64)?;
    let prize = state.pool;
    let round = state.round;

    let record = DrawRecord {
        round,
        winner: winner.clone(),
        winner_index: winner_index as u64,
        prize,
        denom: config.denom.clone(),
        entries,
        seed: hex::encode(seed),
        beacon_round,
        drawn_at: env.block.time,
    };
    DRAWS.save(deps.storage, round, &record)?;

    // Reset for the next round
    state.round += 1;
    state.entries = 0;
    state.pool = Uint128::zero();
    state.total_draws += 1;
    state.total_paid_out = state.total_paid_out.checked_add(prize)?;
    LEDGER_STATE.save(deps.storage, &state)?;
    for index in 0..entries {
        PLAYERS.remove(deps.storage, index);
    }

    let win_count = PLAYER_WIN_COUNT
        .may_load(deps.storage, &winner)?
        .unwrap_or(0);
    PLAYER_WIN_COUNT.save(deps.storage, &winner, &(win_count + 1))?;
    let total_won = PLAYER_TOTAL_WON
        .may_load(deps.storage, &winner)?
        .unwrap_or(Uint128::zero());
    PLAYER_TOTAL_WON.save(deps.storage, &winner, &total_won.checked_add(prize)?)?;

    let payout = SubMsg::reply_on_error(
        BankMsg::Send {
            to_address: winner.to_string(),
            amount: coins(prize.u128(), &config.denom),
        },
        PAYOUT_REPLY_ID,
    )
    .with_payload(to_json_binary(&PayoutPayload {
        round,
        winner: winner.to_string(),
        amount: prize,
    })?);

    let mut event = Event::new("lottery_winner_picked")
        .add_attribute("round", round.to_string())
        .add_attribute("winner", winner.to_string())
        .add_attribute("winner_index", winner_index.to_string())
        .add_attribute("entries", entries.to_string())
        .add_attribute("prize", prize.to_string())
        .add_attribute("denom", config.denom.clone())
        .add_attribute("seed", record.seed.clone())
        .add_attribute("timestamp", env.block.time.seconds().to_string());
    if let Some(beacon_round) = beacon_round {
        event = event.add_attribute("beacon_round", beacon_round.to_string());
    }

    Ok(Response::new()
        .add_submessage(payout)
        .add_attribute("action", "pick_winner")
        .add_attribute("round", round.to_string())
        .add_attribute("winner", winner.to_string())
        .add_attribute("prize", prize.to_string())
        .add_event(event))
}

/// Handle the outcome of the prize transfer.
///
/// Only failures are delivered here. Returning an error from a reply aborts
/// the parent transaction, so the draw is undone as a whole.
pub fn payout_reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.result {
        SubMsgResult::Err(reason) => {
            let payload: PayoutPayload = from_json(&msg.payload)?;
            Err(ContractError::TransferFailure {
                winner: payload.winner,
                amount: payload.amount.to_string(),
                reason,
            })
        }
        SubMsgResult::Ok(_) => Ok(Response::new().add_attribute("action", "payout_sent")),
    }
}
