use cosmwasm_std::{Addr, Event, HexBinary, Uint128};

use crate::asset::Asset;
use crate::swap::Swap;

pub const SWAP_CREATED: &str = "swap_created";
pub const SWAP_COMPLETED: &str = "swap_completed";
pub const SWAP_CANCELLED: &str = "swap_cancelled";
pub const FEES_WITHDRAWN: &str = "fees_withdrawn";

/// Carries the full parameter tuple so observers can rebuild the id and deadline.
pub fn swap_created(id: &HexBinary, swap: &Swap, deadline_height: u64) -> Event {
    Event::new(SWAP_CREATED)
        .add_attribute("id", id.to_hex())
        .add_attribute("asset", swap.asset.to_string())
        .add_attribute("depositor", swap.depositor.as_str())
        .add_attribute("beneficiary", swap.beneficiary.as_str())
        .add_attribute("amount", swap.amount)
        .add_attribute("secret_hash", swap.secret_hash.to_hex())
        .add_attribute("creation_height", swap.creation_height.to_string())
        .add_attribute("deadline_height", deadline_height.to_string())
}

pub fn swap_completed(id: &HexBinary, claimant: &Addr, net_amount: Uint128, fee: Uint128) -> Event {
    Event::new(SWAP_COMPLETED)
        .add_attribute("id", id.to_hex())
        .add_attribute("claimant", claimant.as_str())
        .add_attribute("net_amount", net_amount)
        .add_attribute("fee", fee)
}

pub fn swap_cancelled(id: &HexBinary, refunded: Uint128) -> Event {
    Event::new(SWAP_CANCELLED)
        .add_attribute("id", id.to_hex())
        .add_attribute("refunded", refunded)
}

pub fn fees_withdrawn(asset: &Asset, recipient: &Addr, amount: Uint128) -> Event {
    Event::new(FEES_WITHDRAWN)
        .add_attribute("asset", asset.to_string())
        .add_attribute("recipient", recipient.as_str())
        .add_attribute("amount", amount)
}
