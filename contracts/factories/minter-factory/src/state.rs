use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

use minter_types::access::{Role, RoleGuard};
use minter_types::msg::SetupMsg;

#[cw_serde]
pub struct FactoryParams {
    /// Instance whose code is used for every new collection
    pub template: Addr,
    /// Recorded for platform tooling, instances take theirs from the setup message
    pub default_platform_admin: Addr,
    pub product_label: String,
}

/// Creation waiting for the instantiate reply.
#[cw_serde]
pub struct PendingCreation {
    pub creator: Addr,
    pub setup: SetupMsg,
}

pub const PARAMS: Item<FactoryParams> = Item::new("params");
pub const OWNER: RoleGuard = RoleGuard::new(Role::FactoryOwner, "owner");
pub const PENDING_CREATION: Item<PendingCreation> = Item::new("pending_creation");
// Instances of each creator keyed by creation index
pub const INSTANCES: Map<(&Addr, u32), Addr> = Map::new("instances");
pub const INSTANCE_COUNT: Map<&Addr, u32> = Map::new("instance_count");
