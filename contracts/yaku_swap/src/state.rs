use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

use crate::asset::Asset;

#[cw_serde]
pub struct Config {
    /// Operator allowed to withdraw accumulated fees.
    pub owner: Addr,
    /// Number of blocks after creation during which a swap can be completed.
    pub deadline_window: u64,
}

/// Lifecycle of a single swap identifier.
///
/// `NonExistent` is never written to storage, it is what an absent key reads as.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum SwapStatus {
    NonExistent,
    Created,
    Completed,
    Cancelled,
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SwapStatus::NonExistent => "non_existent",
            SwapStatus::Created => "created",
            SwapStatus::Completed => "completed",
            SwapStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const SWAPS: Map<&[u8], SwapStatus> = Map::new("swaps");
pub const FEES: Map<&str, Uint128> = Map::new("fees");

pub fn swap_status(storage: &dyn Storage, id: &HexBinary) -> StdResult<SwapStatus> {
    Ok(SWAPS
        .may_load(storage, id.as_slice())?
        .unwrap_or(SwapStatus::NonExistent))
}

pub fn set_swap_status(storage: &mut dyn Storage, id: &HexBinary, status: SwapStatus) -> StdResult<()> {
    SWAPS.save(storage, id.as_slice(), &status)
}

pub fn accumulated_fee(storage: &dyn Storage, asset: &Asset) -> StdResult<Uint128> {
    Ok(FEES
        .may_load(storage, &asset.storage_key())?
        .unwrap_or_default())
}

pub fn add_fee(storage: &mut dyn Storage, asset: &Asset, amount: Uint128) -> StdResult<Uint128> {
    FEES.update(storage, &asset.storage_key(), |fees| -> StdResult<_> {
        Ok(fees.unwrap_or_default().checked_add(amount)?)
    })
}

/// Returns the accumulated fee for `asset` and resets it to zero.
pub fn take_fee(storage: &mut dyn Storage, asset: &Asset) -> StdResult<Uint128> {
    let key = asset.storage_key();
    let fees = FEES.may_load(storage, &key)?.unwrap_or_default();
    FEES.remove(storage, &key);
    Ok(fees)
}
