use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;
use minter_types::msg::SetupMsg;

use crate::state::FactoryParams;

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the sender
    pub owner: Option<String>,
    pub template: String,
    pub default_platform_admin: String,
    pub product_label: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    CreateInstance { msg: SetupMsg },
    ChangeTemplate { template: String },
    ChangeDefaultPlatformAdmin { admin: String },
    UpdateOwner { owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ParamsResponse)]
    Params {},
    #[returns(Option<Addr>)]
    Owner {},
    #[returns(InstancesResponse)]
    InstancesByCreator {
        creator: String,
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(u32)]
    InstanceCount { creator: String },
}

#[cw_serde]
pub struct ParamsResponse {
    pub params: FactoryParams,
}

#[cw_serde]
pub struct InstancesResponse {
    pub instances: Vec<Addr>,
}

/// Data of a successful `CreateInstance`
#[cw_serde]
pub struct CreateInstanceResponse {
    pub instance: Addr,
}

#[cw_serde]
pub struct MigrateMsg {}
