use cosmwasm_std::{Addr, Empty};
use cw721_base::Cw721Contract;
use cw_storage_plus::{Item, Map};

use minter_types::access::{Role, RoleGuard};
use minter_types::collection_details::CollectionDetails;
use minter_types::config::Config;
use minter_types::types::{Lifecycle, Phase, UserDetails};
use pauser::PauseState;
use payment_splitter::PaymentSplitter;

/// Token storage of the collection, the instance is its only minter
pub type Cw721 = Cw721Contract<'static, Empty, Empty, Empty, Empty>;

pub const LIFECYCLE: Item<Lifecycle> = Item::new("lifecycle");
pub const CONFIG: Item<Config> = Item::new("config");
pub const COLLECTION: Item<CollectionDetails> = Item::new("collection");
pub const PHASE: Item<Phase> = Item::new("phase");
// Tokens issued so far, also the last issued token id
pub const MINTED_COUNT: Item<u32> = Item::new("minted_count");
// Address and number of tokens received in each phase
pub const USER_MINTING_DETAILS: Map<Addr, UserDetails> = Map::new("user_minting_details");
pub const PLATFORM_ADMIN: Item<Addr> = Item::new("platform_admin");

pub const OWNER: RoleGuard = RoleGuard::new(Role::Owner, "owner");
pub const PAUSE_STATE: PauseState = PauseState::new();
pub const PAYMENT_SPLITTER: PaymentSplitter = PaymentSplitter::new();
