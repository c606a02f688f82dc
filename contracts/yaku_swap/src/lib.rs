//! Hash-locked escrow for native coins and CW20 tokens.
//!
//! A depositor locks funds behind the SHA-256 hash of a secret. Anyone who
//! knows the secret can release them to the beneficiary until the deadline
//! height, after which only a refund to the depositor is possible. Completed
//! swaps leave a small fee that the contract owner can withdraw.

pub mod asset;
pub mod contract;
mod error;
pub mod events;
pub mod id;
pub mod msg;
pub mod state;
pub mod swap;

pub use crate::error::ContractError;
