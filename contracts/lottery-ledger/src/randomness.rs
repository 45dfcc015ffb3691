use cosmwasm_std::{to_json_binary, Addr, Deps, Env, QueryRequest, WasmQuery};
use lottery_common::entropy::{block_seed, mix_seed, EntropyInputs};
use lottery_common::types::{BeaconResponse, OracleQueryMsg, RandomnessSource};

use crate::error::ContractError;

/// Seed for one draw and the oracle round that went into it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawSeed {
    pub seed: [u8; 32],
    pub beacon_round: Option<u64>,
}

/// Build the seed for a draw.
///
/// With `BlockEntropy` the seed is a hash of chain id, height, block time,
/// transaction index, sender, round and entry count. Every one of those is
/// known or chosen by someone at execution time. Known limitation: a block
/// producer or the manager can bias the outcome.
///
/// With `Oracle` the same block seed is mixed with the latest verified beacon
/// of the configured drand oracle.
pub fn draw_seed(
    deps: Deps,
    env: &Env,
    sender: &Addr,
    source: &RandomnessSource,
    round: u64,
    entries: u64,
) -> Result<DrawSeed, ContractError> {
    let seed = block_seed(&EntropyInputs {
        chain_id: &env.block.chain_id,
        height: env.block.height,
        time_nanos: env.block.time.nanos(),
        tx_index: env.transaction.as_ref().map(|tx| tx.index).unwrap_or(0),
        sender: sender.as_str(),
        round,
        entries,
    });

    match source {
        RandomnessSource::BlockEntropy => Ok(DrawSeed {
            seed,
            beacon_round: None,
        }),
        RandomnessSource::Oracle { contract } => {
            let beacon = latest_beacon(deps, contract)?;
            Ok(DrawSeed {
                seed: mix_seed(&seed, &beacon.randomness),
                beacon_round: Some(beacon.round),
            })
        }
    }
}

fn latest_beacon(deps: Deps, oracle: &Addr) -> Result<BeaconResponse, ContractError> {
    let round_query = QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: oracle.to_string(),
        msg: to_json_binary(&OracleQueryMsg::LatestRound {})?,
    });
    let latest: u64 = deps
        .querier
        .query(&round_query)
        .map_err(|e| ContractError::BeaconUnavailable {
            reason: e.to_string(),
        })?;
    if latest == 0 {
        return Err(ContractError::BeaconUnavailable {
            reason: "oracle has no beacons yet".to_string(),
        });
    }

    let beacon_query = QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: oracle.to_string(),
        msg: to_json_binary(&OracleQueryMsg::Beacon { round: latest })?,
    });
    let beacon: Option<BeaconResponse> =
        deps.querier
            .query(&beacon_query)
            .map_err(|e| ContractError::BeaconUnavailable {
                reason: e.to_string(),
            })?;
    let beacon = beacon.ok_or_else(|| ContractError::BeaconUnavailable {
        reason: format!("beacon for round {} not found", latest),
    })?;

    if !beacon.verified || beacon.randomness.len() != 32 {
        return Err(ContractError::BeaconUnavailable {
            reason: format!("beacon for round {} is malformed", latest),
        });
    }

    Ok(beacon)
}
