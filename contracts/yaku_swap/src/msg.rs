use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary, Uint128};
use cw20::Cw20ReceiveMsg;

use crate::asset::AssetInfo;
use crate::state::SwapStatus;

#[cw_serde]
pub struct InstantiateMsg {
    /// Fee operator, defaults to the instantiating account
    pub owner: Option<String>,
    /// Blocks a swap stays claimable after creation
    pub deadline_window: Option<u64>,
}

/// Full parameter tuple of an existing swap, as emitted in `swap_created`.
#[cw_serde]
pub struct SwapParams {
    pub asset: AssetInfo,
    pub depositor: String,
    pub beneficiary: String,
    pub amount: Uint128,
    pub secret_hash: HexBinary,
    pub creation_height: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Lock funds for `beneficiary`. Native funds must be attached, CW20 funds
    /// are pulled from the sender's allowance.
    CreateSwap {
        asset: AssetInfo,
        beneficiary: String,
        amount: Uint128,
        secret_hash: HexBinary,
    },
    /// Create a CW20 swap through `Send`
    Receive(Cw20ReceiveMsg),
    /// Release the funds to the beneficiary by revealing the secret
    CompleteSwap { swap: SwapParams, secret: HexBinary },
    /// Refund the depositor once the deadline has passed
    CancelSwap { swap: SwapParams },
    /// Withdraw accumulated fees (owner only)
    WithdrawFees { asset: AssetInfo },
    /// Update owner
    UpdateOwner { new_owner: String },
}

#[cw_serde]
pub enum ReceiveMsg {
    CreateSwap {
        beneficiary: String,
        secret_hash: HexBinary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(SwapStatusResponse)]
    SwapStatus { id: HexBinary },
    /// Fees collected and not yet withdrawn
    #[returns(FeesResponse)]
    AccumulatedFees { asset: AssetInfo },
    /// Re-derive the identifier of a parameter tuple
    #[returns(SwapIdResponse)]
    SwapId { swap: SwapParams },
    #[returns(SwapListResponse)]
    ListSwaps {
        start_after: Option<HexBinary>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub deadline_window: u64,
    pub fee_numerator: u64,
    pub fee_denominator: u64,
    pub min_swap_amount: Uint128,
}

#[cw_serde]
pub struct SwapStatusResponse {
    pub id: HexBinary,
    pub status: SwapStatus,
}

#[cw_serde]
pub struct FeesResponse {
    pub asset: AssetInfo,
    pub amount: Uint128,
}

#[cw_serde]
pub struct SwapIdResponse {
    pub id: HexBinary,
    pub deadline_height: u64,
}

#[cw_serde]
pub struct SwapListResponse {
    pub swaps: Vec<SwapStatusResponse>,
}

/// Data attached to the `CreateSwap` response.
#[cw_serde]
pub struct CreateSwapResponse {
    pub id: HexBinary,
    pub creation_height: u64,
    pub deadline_height: u64,
}
