#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    from_binary, to_binary, Addr, Api, Binary, Deps, DepsMut, Env, HexBinary, MessageInfo, Order,
    Reply, Response, StdError, StdResult, SubMsg, SubMsgResult, Uint128,
};
use cw2::set_contract_version;
use cw20::Cw20ReceiveMsg;
use cw_storage_plus::Bound;
use cw_utils::nonpayable;

use crate::asset::{Asset, AssetInfo, ESCROW_REPLY_ID, RELEASE_REPLY_ID};
use crate::error::ContractError;
use crate::events;
use crate::id::hash_secret;
use crate::msg::{
    ConfigResponse, CreateSwapResponse, ExecuteMsg, FeesResponse, InstantiateMsg, QueryMsg,
    ReceiveMsg, SwapIdResponse, SwapListResponse, SwapParams, SwapStatusResponse,
};
use crate::state::{
    accumulated_fee, add_fee, set_swap_status, swap_status, take_fee, Config, SwapStatus, CONFIG,
    SWAPS,
};
use crate::swap::{split_fee, validate_addr, Swap};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:yaku_swap";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Share of a completed swap paid to the beneficiary, the rest is the fee.
pub const FEE_NUMERATOR: u64 = 993;
pub const FEE_DENOMINATOR: u64 = 1000;
/// Smallest swap for which the fee split is not degenerate.
pub const MIN_SWAP_AMOUNT: u128 = 1000;
pub const DEFAULT_DEADLINE_WINDOW: u64 = 240;
pub const MIN_DEADLINE_WINDOW: u64 = 10;

const SECRET_HASH_LEN: usize = 32;
const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let owner = match msg.owner {
        Some(owner) => validate_addr(deps.api, &owner, "owner")?,
        None => info.sender,
    };

    let deadline_window = msg.deadline_window.unwrap_or(DEFAULT_DEADLINE_WINDOW);
    if deadline_window <= MIN_DEADLINE_WINDOW {
        return Err(ContractError::invalid_argument(format!(
            "deadline window must be greater than {} blocks",
            MIN_DEADLINE_WINDOW
        )));
    }

    let config = Config {
        owner: owner.clone(),
        deadline_window,
    };

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("deadline_window", deadline_window.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateSwap {
            asset,
            beneficiary,
            amount,
            secret_hash,
        } => execute_create_swap(deps, env, info, asset, beneficiary, amount, secret_hash),
        ExecuteMsg::Receive(msg) => execute_receive(deps, env, info, msg),
        ExecuteMsg::CompleteSwap { swap, secret } => {
            execute_complete_swap(deps, env, info, swap, secret)
        }
        ExecuteMsg::CancelSwap { swap } => execute_cancel_swap(deps, env, info, swap),
        ExecuteMsg::WithdrawFees { asset } => execute_withdraw_fees(deps, info, asset),
        ExecuteMsg::UpdateOwner { new_owner } => execute_update_owner(deps, info, new_owner),
    }
}

pub fn execute_create_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: AssetInfo,
    beneficiary: String,
    amount: Uint128,
    secret_hash: HexBinary,
) -> Result<Response, ContractError> {
    let asset = asset.validate(deps.api)?;
    let swap = new_swap(
        deps.api,
        &env,
        asset,
        info.sender.clone(),
        &beneficiary,
        amount,
        secret_hash,
    )?;

    let escrow = swap
        .asset
        .transfer()
        .escrow(&info, &swap.depositor, &env.contract.address, swap.amount)?;

    create_swap(deps, swap, escrow, "create_swap")
}

pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let msg: ReceiveMsg = from_binary(&wrapper.msg)?;
    let depositor = deps.api.addr_validate(&wrapper.sender)?;

    match msg {
        ReceiveMsg::CreateSwap {
            beneficiary,
            secret_hash,
        } => {
            // info.sender is the token contract, which already holds the funds for us
            let swap = new_swap(
                deps.api,
                &env,
                Asset::Cw20(info.sender),
                depositor,
                &beneficiary,
                wrapper.amount,
                secret_hash,
            )?;
            create_swap(deps, swap, vec![], "receive_create_swap")
        }
    }
}

fn new_swap(
    api: &dyn Api,
    env: &Env,
    asset: Asset,
    depositor: Addr,
    beneficiary: &str,
    amount: Uint128,
    secret_hash: HexBinary,
) -> Result<Swap, ContractError> {
    let beneficiary = validate_addr(api, beneficiary, "beneficiary")?;

    if amount < Uint128::new(MIN_SWAP_AMOUNT) {
        return Err(ContractError::invalid_argument(format!(
            "swap amount must be at least {}",
            MIN_SWAP_AMOUNT
        )));
    }

    if secret_hash.len() != SECRET_HASH_LEN {
        return Err(ContractError::invalid_argument(format!(
            "secret hash must be {} bytes",
            SECRET_HASH_LEN
        )));
    }

    Ok(Swap {
        asset,
        depositor,
        beneficiary,
        amount,
        secret_hash,
        creation_height: env.block.height,
    })
}

fn create_swap(
    deps: DepsMut,
    swap: Swap,
    escrow: Vec<SubMsg>,
    method: &str,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let id = swap.id();
    if swap_status(deps.storage, &id)? != SwapStatus::NonExistent {
        return Err(ContractError::IdentifierCollision {});
    }
    set_swap_status(deps.storage, &id, SwapStatus::Created)?;

    let deadline_height = swap.deadline_height(config.deadline_window);
    let data = CreateSwapResponse {
        id: id.clone(),
        creation_height: swap.creation_height,
        deadline_height,
    };

    Ok(Response::new()
        .add_submessages(escrow)
        .add_event(events::swap_created(&id, &swap, deadline_height))
        .set_data(to_binary(&data)?)
        .add_attribute("method", method)
        .add_attribute("id", id.to_hex())
        .add_attribute("amount", swap.amount))
}

pub fn execute_complete_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: SwapParams,
    secret: HexBinary,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let swap = params.validate(deps.api)?;

    if hash_secret(secret.as_slice()) != swap.secret_hash {
        return Err(ContractError::SecretMismatch {});
    }

    let id = swap.id();
    ensure_created(deps.as_ref(), &id)?;

    let config = CONFIG.load(deps.storage)?;
    if env.block.height > swap.deadline_height(config.deadline_window) {
        return Err(ContractError::DeadlineExceeded {});
    }

    let (net_amount, fee) = split_fee(swap.amount);

    // status flips before the payout is dispatched
    set_swap_status(deps.storage, &id, SwapStatus::Completed)?;
    let payout = swap.asset.transfer().release(&swap.beneficiary, net_amount)?;
    add_fee(deps.storage, &swap.asset, fee)?;

    Ok(Response::new()
        .add_submessage(payout)
        .add_event(events::swap_completed(&id, &info.sender, net_amount, fee))
        .add_attribute("method", "complete_swap")
        .add_attribute("id", id.to_hex())
        .add_attribute("recipient", swap.beneficiary)
        .add_attribute("amount", net_amount))
}

pub fn execute_cancel_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: SwapParams,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let swap = params.validate(deps.api)?;

    let id = swap.id();
    ensure_created(deps.as_ref(), &id)?;

    let config = CONFIG.load(deps.storage)?;
    if env.block.height <= swap.deadline_height(config.deadline_window) {
        return Err(ContractError::DeadlineNotReached {});
    }

    if info.sender != swap.depositor {
        return Err(ContractError::NotAuthorized {});
    }

    // status flips before the refund is dispatched
    set_swap_status(deps.storage, &id, SwapStatus::Cancelled)?;
    let refund = swap.asset.transfer().release(&swap.depositor, swap.amount)?;

    Ok(Response::new()
        .add_submessage(refund)
        .add_event(events::swap_cancelled(&id, swap.amount))
        .add_attribute("method", "cancel_swap")
        .add_attribute("id", id.to_hex())
        .add_attribute("recipient", swap.depositor)
        .add_attribute("amount", swap.amount))
}

/// Handlers other than native creation never forward attached coins.
fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    nonpayable(info).map_err(|err| ContractError::invalid_argument(err.to_string()))
}

fn ensure_created(deps: Deps, id: &HexBinary) -> Result<(), ContractError> {
    match swap_status(deps.storage, id)? {
        SwapStatus::Created => Ok(()),
        status => Err(ContractError::InvalidSwapState { status }),
    }
}

pub fn execute_withdraw_fees(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::NotAuthorized {});
    }

    let asset = asset.validate(deps.api)?;
    let amount = take_fee(deps.storage, &asset)?;

    let response = Response::new()
        .add_attribute("method", "withdraw_fees")
        .add_attribute("asset", asset.to_string())
        .add_attribute("amount", amount);

    if amount.is_zero() {
        return Ok(response);
    }

    let payout = asset.transfer().release(&config.owner, amount)?;

    Ok(response
        .add_submessage(payout)
        .add_event(events::fees_withdrawn(&asset, &config.owner, amount)))
}

pub fn execute_update_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.owner {
        return Err(ContractError::NotAuthorized {});
    }

    let new_owner = validate_addr(deps.api, &new_owner, "owner")?;
    config.owner = new_owner.clone();

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_owner")
        .add_attribute("new_owner", new_owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        ESCROW_REPLY_ID | RELEASE_REPLY_ID => match msg.result {
            SubMsgResult::Err(reason) => {
                deps.api
                    .debug(&format!("yaku_swap: transfer (reply {}) failed: {}", msg.id, reason));
                Err(ContractError::TransferFailed { reason })
            }
            SubMsgResult::Ok(_) => Ok(Response::new()),
        },
        id => Err(ContractError::Std(StdError::generic_err(format!(
            "Unknown reply id: {}",
            id
        )))),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::SwapStatus { id } => to_binary(&query_swap_status(deps, id)?),
        QueryMsg::AccumulatedFees { asset } => to_binary(&query_accumulated_fees(deps, asset)?),
        QueryMsg::SwapId { swap } => to_binary(&query_swap_id(deps, swap)?),
        QueryMsg::ListSwaps { start_after, limit } => {
            to_binary(&query_list_swaps(deps, start_after, limit)?)
        }
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        deadline_window: config.deadline_window,
        fee_numerator: FEE_NUMERATOR,
        fee_denominator: FEE_DENOMINATOR,
        min_swap_amount: Uint128::new(MIN_SWAP_AMOUNT),
    })
}

fn query_swap_status(deps: Deps, id: HexBinary) -> StdResult<SwapStatusResponse> {
    let status = swap_status(deps.storage, &id)?;
    Ok(SwapStatusResponse { id, status })
}

fn query_accumulated_fees(deps: Deps, asset: AssetInfo) -> StdResult<FeesResponse> {
    let validated = asset.validate(deps.api).map_err(into_std)?;
    let amount = accumulated_fee(deps.storage, &validated)?;
    Ok(FeesResponse { asset, amount })
}

fn query_swap_id(deps: Deps, params: SwapParams) -> StdResult<SwapIdResponse> {
    let config = CONFIG.load(deps.storage)?;
    let swap = params.validate(deps.api).map_err(into_std)?;
    Ok(SwapIdResponse {
        id: swap.id(),
        deadline_height: swap.deadline_height(config.deadline_window),
    })
}

fn query_list_swaps(
    deps: Deps,
    start_after: Option<HexBinary>,
    limit: Option<u32>,
) -> StdResult<SwapListResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_ref().map(|id| Bound::exclusive(id.as_slice()));

    let swaps = SWAPS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            item.map(|(id, status)| SwapStatusResponse {
                id: HexBinary::from(id),
                status,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(SwapListResponse { swaps })
}

fn into_std(err: ContractError) -> StdError {
    match err {
        ContractError::Std(err) => err,
        err => StdError::generic_err(err.to_string()),
    }
}
