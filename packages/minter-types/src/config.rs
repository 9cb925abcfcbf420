use cosmwasm_schema::cw_serde;
use cosmwasm_std::{HexBinary, Uint128};

use crate::error::ValidationError;
use crate::types::Phase;
use crate::utils::check_not_empty;

pub const ALLOWLIST_ROOT_LENGTH: usize = 32;

#[cw_serde]
pub struct PhaseTerms {
    /// Price of a single token in `mint_denom`
    pub price: Uint128,
    /// Tokens a single recipient may receive during the phase
    pub limit: u32,
}

#[cw_serde]
pub struct Config {
    pub mint_denom: String,
    pub max_supply: u32,
    pub restricted: PhaseTerms,
    pub open: PhaseTerms,
    pub allowlist_root: HexBinary,
}

impl Config {
    pub fn terms(&self, phase: Phase) -> &PhaseTerms {
        match phase {
            Phase::Restricted => &self.restricted,
            Phase::Open => &self.open,
        }
    }

    pub fn terms_mut(&mut self, phase: Phase) -> &mut PhaseTerms {
        match phase {
            Phase::Restricted => &mut self.restricted,
            Phase::Open => &mut self.open,
        }
    }

    pub fn check_limit(&self, limit: u32) -> Result<(), ValidationError> {
        if limit > self.max_supply {
            return Err(ValidationError::LimitExceedsSupply {
                limit,
                max_supply: self.max_supply,
            });
        }
        Ok(())
    }

    pub fn check_integrity(&self) -> Result<(), ValidationError> {
        check_not_empty("mint_denom", &self.mint_denom)?;
        if self.max_supply == 0 {
            return Err(ValidationError::ZeroMaxSupply {});
        }
        // Only rejected when neither phase limit fits under the supply
        if self.check_limit(self.restricted.limit).is_err() {
            self.check_limit(self.open.limit)?;
        }
        if self.allowlist_root.len() != ALLOWLIST_ROOT_LENGTH {
            return Err(ValidationError::InvalidAllowlistRoot {
                length: self.allowlist_root.len(),
            });
        }
        Ok(())
    }
}
