use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Deps, DepsMut, StdError, StdResult};
use cw_controllers::Admin;
use thiserror::Error;

/// Privileged identities.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum Role {
    /// Controls pricing, phase and pause of a minter instance
    Owner,
    /// Controls instance creation and factory parameters
    FactoryOwner,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Owner => f.write_str("owner"),
            Role::FactoryOwner => f.write_str("factory owner"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AccessError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("Unauthorized: {sender} is not the {role}")]
    Unauthorized { role: Role, sender: Addr },
}

/// Stores the holder of a role and checks callers against it.
pub struct RoleGuard<'a> {
    pub role: Role,
    holder: Admin<'a>,
}

impl<'a> RoleGuard<'a> {
    pub const fn new(role: Role, namespace: &'a str) -> Self {
        RoleGuard {
            role,
            holder: Admin::new(namespace),
        }
    }

    pub fn set(&self, deps: DepsMut, holder: Addr) -> StdResult<()> {
        self.holder.set(deps, Some(holder))
    }

    /// Current holder, `None` until the role is assigned.
    pub fn holder(&self, deps: Deps) -> StdResult<Option<Addr>> {
        match self.holder.get(deps) {
            Err(StdError::NotFound { .. }) => Ok(None),
            res => res,
        }
    }

    pub fn assert(&self, deps: Deps, sender: &Addr) -> Result<(), AccessError> {
        match self.holder(deps)? {
            Some(holder) if holder == *sender => Ok(()),
            _ => Err(AccessError::Unauthorized {
                role: self.role,
                sender: sender.clone(),
            }),
        }
    }
}
