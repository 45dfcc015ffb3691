use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::msg::{DrawHistoryResponse, PlayerWinsResponse, PlayersResponse, PoolBalanceResponse};
use crate::state::{CONFIG, DRAWS, LEDGER_STATE, PLAYERS, PLAYER_TOTAL_WON, PLAYER_WIN_COUNT};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

pub fn query_players(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let state = LEDGER_STATE.load(deps.storage)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let players = PLAYERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|r| r.map(|(_, player)| player))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&PlayersResponse {
        players,
        count: state.entries,
    })
}

pub fn query_manager(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config.manager)
}

pub fn query_pool_balance(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let state = LEDGER_STATE.load(deps.storage)?;
    to_json_binary(&PoolBalanceResponse {
        denom: config.denom,
        amount: state.pool,
    })
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_state(deps: Deps) -> StdResult<Binary> {
    let state = LEDGER_STATE.load(deps.storage)?;
    to_json_binary(&state)
}

pub fn query_draw(deps: Deps, round: u64) -> StdResult<Binary> {
    let draw = DRAWS.may_load(deps.storage, round)?;
    to_json_binary(&draw)
}

pub fn query_draw_history(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let draws = DRAWS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|r| r.map(|(_, draw)| draw))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&DrawHistoryResponse { draws })
}

pub fn query_player_wins(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let total_wins = PLAYER_WIN_COUNT
        .may_load(deps.storage, &addr)?
        .unwrap_or(0);
    let total_won = PLAYER_TOTAL_WON
        .may_load(deps.storage, &addr)?
        .unwrap_or(Uint128::zero());

    to_json_binary(&PlayerWinsResponse {
        address,
        total_wins,
        total_won,
    })
}
