use cosmwasm_std::StdError;
use thiserror::Error;

use crate::state::SwapStatus;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Swap identifier already in use")]
    IdentifierCollision {},

    #[error("Invalid swap state: {status}")]
    InvalidSwapState { status: SwapStatus },

    #[error("Secret does not match the secret hash")]
    SecretMismatch {},

    #[error("Swap deadline exceeded")]
    DeadlineExceeded {},

    #[error("Swap deadline not reached yet")]
    DeadlineNotReached {},

    #[error("Not authorized")]
    NotAuthorized {},

    #[error("Transfer failed: {reason}")]
    TransferFailed { reason: String },
}

impl ContractError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        ContractError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn transfer_failed(reason: impl ToString) -> Self {
        ContractError::TransferFailed {
            reason: reason.to_string(),
        }
    }
}
