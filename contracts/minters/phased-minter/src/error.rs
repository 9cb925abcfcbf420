use cosmwasm_std::{Addr, StdError, Uint128};
use cw_utils::PaymentError;
use minter_types::access::AccessError;
use minter_types::error::{ErrorKind, ValidationError};
use minter_types::types::Phase;
use pauser::PauseError;
use payment_splitter::SplitterError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Pause(#[from] PauseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Splitter(#[from] SplitterError),

    #[error("Payment error")]
    PaymentError(#[from] PaymentError),

    #[error("Template can not be set up")]
    TemplateNotInitializable {},

    #[error("Instance is already set up")]
    AlreadyInitialized {},

    #[error("Instance is not set up")]
    NotInitialized {},

    #[error("Funds are only accepted by mint")]
    FundsNotAccepted {},

    #[error("Unsupported operation: {operation}")]
    UnsupportedOperation { operation: String },

    #[error("Max supply exceeded")]
    MaxSupplyExceeded {
        requested: u32,
        minted: u32,
        max_supply: u32,
    },

    #[error("Recipient has reached the {phase} phase limit")]
    QuotaExceeded {
        phase: Phase,
        limit: u32,
        minted: u32,
        requested: u32,
    },

    #[error("Address is not allowlisted")]
    AddressNotAllowlisted { address: Addr },

    #[error("Incorrect payment amount")]
    IncorrectPaymentAmount { expected: Uint128, sent: Uint128 },

    #[error("Price overflow")]
    PriceOverflow {},

    #[error("Token operation rejected: {reason}")]
    TokenRejected { reason: String },

    #[error("Can not migrate from {previous_contract}")]
    CannotMigrate { previous_contract: String },

    #[error("Can not migrate from version {previous_version} to {new_version}")]
    CannotDowngrade {
        previous_version: String,
        new_version: String,
    },

    #[error("Semver parsing error: {0}")]
    SemVer(String),
}

impl ContractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContractError::Std(_)
            | ContractError::Pause(PauseError::Std(_))
            | ContractError::Access(AccessError::Std(_))
            | ContractError::Splitter(SplitterError::Std(_)) => ErrorKind::Runtime,

            ContractError::Access(AccessError::Unauthorized { .. })
            | ContractError::Splitter(SplitterError::NotPayee { .. })
            | ContractError::TokenRejected { .. } => ErrorKind::Authorization,

            ContractError::Splitter(SplitterError::NoPaymentDue { .. }) => ErrorKind::Payment,

            // Payee registration
            ContractError::Validation(_) | ContractError::Splitter(_) => ErrorKind::Validation,

            ContractError::MaxSupplyExceeded { .. } | ContractError::QuotaExceeded { .. } => {
                ErrorKind::Capacity
            }

            ContractError::AddressNotAllowlisted { .. } => ErrorKind::Proof,

            ContractError::PaymentError(_)
            | ContractError::IncorrectPaymentAmount { .. }
            | ContractError::PriceOverflow {} => ErrorKind::Payment,

            ContractError::Pause(PauseError::Paused {})
            | ContractError::TemplateNotInitializable {}
            | ContractError::AlreadyInitialized {}
            | ContractError::NotInitialized {}
            | ContractError::CannotMigrate { .. }
            | ContractError::CannotDowngrade { .. }
            | ContractError::SemVer(_) => ErrorKind::Lifecycle,

            ContractError::FundsNotAccepted {} | ContractError::UnsupportedOperation { .. } => {
                ErrorKind::Unsupported
            }
        }
    }
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::generic_err(err.to_string())
    }
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        ContractError::SemVer(err.to_string())
    }
}

impl From<cw721_base::ContractError> for ContractError {
    fn from(err: cw721_base::ContractError) -> Self {
        match err {
            cw721_base::ContractError::Std(err) => ContractError::Std(err),
            err => ContractError::TokenRejected {
                reason: err.to_string(),
            },
        }
    }
}
