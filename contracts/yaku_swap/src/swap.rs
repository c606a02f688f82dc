use cosmwasm_std::{Addr, Api, HexBinary, Uint128};

use crate::asset::Asset;
use crate::contract::{FEE_DENOMINATOR, FEE_NUMERATOR};
use crate::error::ContractError;
use crate::id::derive_swap_id;
use crate::msg::SwapParams;

/// Validated parameter tuple of a swap. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Swap {
    pub asset: Asset,
    pub depositor: Addr,
    pub beneficiary: Addr,
    pub amount: Uint128,
    pub secret_hash: HexBinary,
    pub creation_height: u64,
}

impl Swap {
    pub fn id(&self) -> HexBinary {
        derive_swap_id(
            &self.asset,
            &self.depositor,
            &self.beneficiary,
            self.amount,
            &self.secret_hash,
            self.creation_height,
        )
    }

    /// Last height at which the swap can still be completed.
    pub fn deadline_height(&self, deadline_window: u64) -> u64 {
        self.creation_height.saturating_add(deadline_window)
    }
}

impl SwapParams {
    pub fn validate(&self, api: &dyn Api) -> Result<Swap, ContractError> {
        Ok(Swap {
            asset: self.asset.validate(api)?,
            depositor: validate_addr(api, &self.depositor, "depositor")?,
            beneficiary: validate_addr(api, &self.beneficiary, "beneficiary")?,
            amount: self.amount,
            secret_hash: self.secret_hash.clone(),
            creation_height: self.creation_height,
        })
    }
}

pub fn validate_addr(api: &dyn Api, addr: &str, field: &str) -> Result<Addr, ContractError> {
    api.addr_validate(addr)
        .map_err(|_| ContractError::invalid_argument(format!("invalid {} address", field)))
}

/// Splits `amount` into the payout and the retained fee.
pub fn split_fee(amount: Uint128) -> (Uint128, Uint128) {
    let net = amount.multiply_ratio(FEE_NUMERATOR, FEE_DENOMINATOR);
    (net, amount - net)
}
