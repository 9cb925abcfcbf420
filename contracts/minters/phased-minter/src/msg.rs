use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Empty, HexBinary, Uint128};

use minter_types::collection_details::CollectionDetails;
use minter_types::config::Config;
use minter_types::msg::SetupMsg;
use minter_types::types::{Lifecycle, Phase, UserDetails};
use payment_splitter::Payee;

pub type Cw721ExecuteMsg = cw721_base::ExecuteMsg<Empty, Empty>;
pub type Cw721QueryMsg = cw721_base::QueryMsg<Empty>;

#[cw_serde]
pub enum InstantiateMsg {
    /// Code source for new instances, can never be set up
    Template {},
    /// Empty instance waiting for `ExecuteMsg::Setup`
    Instance {},
}

#[cw_serde]
pub enum ExecuteMsg {
    Setup(SetupMsg),
    Mint {
        recipient: String,
        amount: u32,
        /// Allowlist proof of the sender, ignored in the open phase
        #[serde(default)]
        proof: Vec<HexBinary>,
    },
    Pause {},
    Unpause {},
    SetPhase {
        phase: Phase,
    },
    ChangeQuota {
        phase: Phase,
        limit: u32,
    },
    ChangePrice {
        phase: Phase,
        price: Uint128,
    },
    UpdateOwner {
        owner: String,
    },
    /// Pays out the proceeds owed to a payee
    Release {
        payee: String,
    },
    /// Token transfers and approvals
    Nft(Cw721ExecuteMsg),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Phase)]
    Phase {},
    #[returns(Uint128)]
    Price { phase: Phase },
    #[returns(String)]
    Name {},
    #[returns(String)]
    Symbol {},
    #[returns(String)]
    Uri {},
    #[returns(u32)]
    TotalMinted {},
    #[returns(Config)]
    Config {},
    #[returns(CollectionDetails)]
    Collection {},
    #[returns(u32)]
    Quota { phase: Phase },
    #[returns(UserDetails)]
    UserMintingDetails { address: String },
    #[returns(bool)]
    IsPaused {},
    #[returns(Lifecycle)]
    Lifecycle {},
    #[returns(Option<Addr>)]
    Owner {},
    #[returns(Addr)]
    PlatformAdmin {},
    #[returns(bool)]
    IsAllowlisted {
        address: String,
        proof: Vec<HexBinary>,
    },
    #[returns(Vec<Payee>)]
    Payees {},
    #[returns(Uint128)]
    Releasable { payee: String },
    /// Raw cw721 response
    #[returns(Binary)]
    Nft(Cw721QueryMsg),
}

#[cw_serde]
pub struct MigrateMsg {}
