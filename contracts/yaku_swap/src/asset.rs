use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_binary, Addr, Api, BankMsg, Coin, MessageInfo, SubMsg, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;
use cw_utils::{must_pay, nonpayable};

use crate::error::ContractError;

// Reply IDs
pub const ESCROW_REPLY_ID: u64 = 1;
pub const RELEASE_REPLY_ID: u64 = 2;

/// Asset reference as it appears in messages.
#[cw_serde]
pub enum AssetInfo {
    /// Bank denom, e.g. `basecro`
    Native { denom: String },
    /// CW20 token contract
    Cw20 { contract_addr: String },
}

impl AssetInfo {
    pub fn validate(&self, api: &dyn Api) -> Result<Asset, ContractError> {
        match self {
            AssetInfo::Native { denom } => {
                if denom.trim().is_empty() {
                    return Err(ContractError::invalid_argument("native denom must not be empty"));
                }
                Ok(Asset::Native(denom.clone()))
            }
            AssetInfo::Cw20 { contract_addr } => api
                .addr_validate(contract_addr)
                .map(Asset::Cw20)
                .map_err(|_| ContractError::invalid_argument("invalid token contract address")),
        }
    }
}

/// Validated asset reference.
#[derive(Clone, Debug, PartialEq)]
pub enum Asset {
    Native(String),
    Cw20(Addr),
}

impl Asset {
    pub(crate) fn discriminant(&self) -> u8 {
        match self {
            Asset::Native(_) => 0,
            Asset::Cw20(_) => 1,
        }
    }

    pub(crate) fn reference(&self) -> &str {
        match self {
            Asset::Native(denom) => denom,
            Asset::Cw20(addr) => addr.as_str(),
        }
    }

    pub fn storage_key(&self) -> String {
        self.to_string()
    }

    /// Transfer strategy for this kind of asset.
    pub fn transfer(&self) -> Box<dyn AssetTransfer + '_> {
        match self {
            Asset::Native(denom) => Box::new(NativeTransfer { denom }),
            Asset::Cw20(contract) => Box::new(TokenTransfer { contract }),
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Native(denom) => write!(f, "native:{}", denom),
            Asset::Cw20(addr) => write!(f, "cw20:{}", addr),
        }
    }
}

/// Moves value into and out of the contract's custody.
///
/// Every outgoing message is a `SubMsg` replying on error, so a failed
/// movement surfaces as `TransferFailed` and reverts the whole transaction.
pub trait AssetTransfer {
    /// Takes `amount` from `depositor` into the custody of `custodian`.
    fn escrow(
        &self,
        info: &MessageInfo,
        depositor: &Addr,
        custodian: &Addr,
        amount: Uint128,
    ) -> Result<Vec<SubMsg>, ContractError>;

    /// Pays `amount` out of custody to `recipient`.
    fn release(&self, recipient: &Addr, amount: Uint128) -> Result<SubMsg, ContractError>;
}

pub struct NativeTransfer<'a> {
    pub denom: &'a str,
}

impl AssetTransfer for NativeTransfer<'_> {
    fn escrow(
        &self,
        info: &MessageInfo,
        _depositor: &Addr,
        _custodian: &Addr,
        amount: Uint128,
    ) -> Result<Vec<SubMsg>, ContractError> {
        // the funds travel with the call itself
        let paid = must_pay(info, self.denom).map_err(ContractError::transfer_failed)?;
        if paid != amount {
            return Err(ContractError::transfer_failed(format!(
                "sent {}{} but the swap amount is {}{}",
                paid, self.denom, amount, self.denom
            )));
        }
        Ok(vec![])
    }

    fn release(&self, recipient: &Addr, amount: Uint128) -> Result<SubMsg, ContractError> {
        let msg = BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![Coin {
                denom: self.denom.to_string(),
                amount,
            }],
        };
        Ok(SubMsg::reply_on_error(msg, RELEASE_REPLY_ID))
    }
}

pub struct TokenTransfer<'a> {
    pub contract: &'a Addr,
}

impl AssetTransfer for TokenTransfer<'_> {
    fn escrow(
        &self,
        info: &MessageInfo,
        depositor: &Addr,
        custodian: &Addr,
        amount: Uint128,
    ) -> Result<Vec<SubMsg>, ContractError> {
        nonpayable(info).map_err(ContractError::transfer_failed)?;

        let msg = WasmMsg::Execute {
            contract_addr: self.contract.to_string(),
            msg: to_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: depositor.to_string(),
                recipient: custodian.to_string(),
                amount,
            })?,
            funds: vec![],
        };
        Ok(vec![SubMsg::reply_on_error(msg, ESCROW_REPLY_ID)])
    }

    fn release(&self, recipient: &Addr, amount: Uint128) -> Result<SubMsg, ContractError> {
        let msg = WasmMsg::Execute {
            contract_addr: self.contract.to_string(),
            msg: to_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        };
        Ok(SubMsg::reply_on_error(msg, RELEASE_REPLY_ID))
    }
}
