use cosmwasm_schema::cw_serde;
use cosmwasm_std::{HexBinary, Uint128};

use crate::collection_details::CollectionDetails;
use crate::config::{Config, PhaseTerms};

/// One-shot configuration of a minter instance.
#[cw_serde]
pub struct SetupMsg {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub mint_denom: String,
    pub restricted_price: Uint128,
    pub open_price: Uint128,
    pub max_supply: u32,
    pub payees: Vec<String>,
    pub shares: Vec<u64>,
    pub platform_admin: String,
    pub owner: String,
    pub restricted_limit: u32,
    pub open_limit: u32,
    /// Root of the allowlist tree, see the `allowlist-proof` package
    pub allowlist_root: HexBinary,
}

impl SetupMsg {
    pub fn collection_details(&self) -> CollectionDetails {
        CollectionDetails {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            uri: self.uri.clone(),
        }
    }

    pub fn config(&self) -> Config {
        Config {
            mint_denom: self.mint_denom.clone(),
            max_supply: self.max_supply,
            restricted: PhaseTerms {
                price: self.restricted_price,
                limit: self.restricted_limit,
            },
            open: PhaseTerms {
                price: self.open_price,
                limit: self.open_limit,
            },
            allowlist_root: self.allowlist_root.clone(),
        }
    }
}
