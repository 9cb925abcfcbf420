use cosmwasm_std::{StdError, Storage};
use cw_storage_plus::Item;
use thiserror::Error;

pub const PAUSED_KEY: &str = "paused";

#[derive(Error, Debug, PartialEq)]
pub enum PauseError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("contract is paused")]
    Paused {},
}

impl From<PauseError> for StdError {
    fn from(err: PauseError) -> StdError {
        match err {
            PauseError::Std(err) => err,
            err => StdError::generic_err(err.to_string()),
        }
    }
}

/// Pause flag of a contract.
///
/// Authorization is left to the caller; pausing and unpausing are
/// unconditional so repeating either one is a no-op.
pub struct PauseState<'a> {
    pub paused: Item<'a, bool>,
}

impl<'a> PauseState<'a> {
    /// Creates a new pause orchestrator using the default storage key.
    pub const fn new() -> Self {
        PauseState {
            paused: Item::new(PAUSED_KEY),
        }
    }

    /// Stores an explicit `false` so the flag is present from the start.
    pub fn initialize(&self, storage: &mut dyn Storage) -> Result<(), PauseError> {
        self.paused.save(storage, &false)?;
        Ok(())
    }

    /// Errors if the module is paused, does nothing otherwise.
    pub fn error_if_paused(&self, storage: &dyn Storage) -> Result<(), PauseError> {
        if self.is_paused(storage)? {
            Err(PauseError::Paused {})
        } else {
            Ok(())
        }
    }

    pub fn pause(&self, storage: &mut dyn Storage) -> Result<(), PauseError> {
        self.paused.save(storage, &true)?;
        Ok(())
    }

    pub fn unpause(&self, storage: &mut dyn Storage) -> Result<(), PauseError> {
        self.paused.save(storage, &false)?;
        Ok(())
    }

    pub fn is_paused(&self, storage: &dyn Storage) -> Result<bool, PauseError> {
        let is_paused = self.paused.may_load(storage)?.unwrap_or(false);
        Ok(is_paused)
    }
}

impl<'a> Default for PauseState<'a> {
    fn default() -> Self {
        Self::new()
    }
}
