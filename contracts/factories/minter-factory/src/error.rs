use cosmwasm_std::StdError;
use cw_utils::ParseReplyError;
use minter_types::access::AccessError;
use minter_types::error::{ErrorKind, ValidationError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("Parse reply error")]
    ParseReply(#[from] ParseReplyError),

    #[error("Funds are not accepted")]
    FundsNotAccepted {},

    #[error("Unknown reply id {id}")]
    UnknownReplyId { id: u64 },

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
            | ContractError::Access(AccessError::Std(_))
            | ContractError::ParseReply(_)
            | ContractError::UnknownReplyId { .. } => ErrorKind::Runtime,
            ContractError::Validation(_) => ErrorKind::Validation,
            ContractError::Access(AccessError::Unauthorized { .. }) => ErrorKind::Authorization,
            ContractError::FundsNotAccepted {} => ErrorKind::Unsupported,
            ContractError::CannotMigrate { .. }
            | ContractError::CannotDowngrade { .. }
            | ContractError::SemVer(_) => ErrorKind::Lifecycle,
        }
    }
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        ContractError::SemVer(err.to_string())
    }
}
