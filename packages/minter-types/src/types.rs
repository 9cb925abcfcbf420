use std::fmt;

use cosmwasm_schema::cw_serde;

/// Sale phase of a collection.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Phase {
    /// Only allowlisted callers may mint
    Restricted,
    Open,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Restricted => "restricted",
            Phase::Open => "open",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an instance stands with respect to its one-shot setup.
///
/// A template is never set up; it only exists so its code can be
/// instantiated again.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Lifecycle {
    Template,
    Uninitialized,
    Initialized,
}

#[derive(Default)]
#[cw_serde]
pub struct UserDetails {
    pub restricted_mints: u32,
    pub open_mints: u32,
}

impl UserDetails {
    pub fn minted_in(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Restricted => self.restricted_mints,
            Phase::Open => self.open_mints,
        }
    }

    pub fn record(&mut self, phase: Phase, amount: u32) {
        match phase {
            Phase::Restricted => self.restricted_mints += amount,
            Phase::Open => self.open_mints += amount,
        }
    }

    pub fn total_minted_count(&self) -> u32 {
        self.restricted_mints + self.open_mints
    }
}
