#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, Event, HexBinary, MessageInfo,
    Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use cw721::ContractInfoResponse;
use semver::Version;

use minter_types::error::ValidationError;
use minter_types::msg::SetupMsg;
use minter_types::types::{Lifecycle, Phase, UserDetails};
use minter_types::utils::validate_address;

use crate::error::ContractError;
use crate::msg::{Cw721ExecuteMsg, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{
    Cw721, COLLECTION, CONFIG, LIFECYCLE, MINTED_COUNT, OWNER, PAUSE_STATE, PAYMENT_SPLITTER,
    PHASE, PLATFORM_ADMIN, USER_MINTING_DETAILS,
};
use crate::utils::{check_no_funds, check_payment, ensure_initialized, unsupported_nft_operation};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:launchpad-phased-minter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    check_no_funds(&info)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let lifecycle = match msg {
        InstantiateMsg::Template {} => Lifecycle::Template,
        InstantiateMsg::Instance {} => Lifecycle::Uninitialized,
    };
    LIFECYCLE.save(deps.storage, &lifecycle)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("template", (lifecycle == Lifecycle::Template).to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Setup(msg) => execute_setup(deps, env, info, msg),
        ExecuteMsg::Mint {
            recipient,
            amount,
            proof,
        } => execute_mint(deps, env, info, recipient, amount, proof),
        ExecuteMsg::Pause {} => execute_pause(deps, env, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, env, info),
        ExecuteMsg::SetPhase { phase } => execute_set_phase(deps, env, info, phase),
        ExecuteMsg::ChangeQuota { phase, limit } => {
            execute_change_quota(deps, env, info, phase, limit)
        }
        ExecuteMsg::ChangePrice { phase, price } => {
            execute_change_price(deps, env, info, phase, price)
        }
        ExecuteMsg::UpdateOwner { owner } => execute_update_owner(deps, env, info, owner),
        ExecuteMsg::Release { payee } => execute_release(deps, env, info, payee),
        ExecuteMsg::Nft(msg) => execute_nft(deps, env, info, msg),
    }
}

pub fn execute_setup(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: SetupMsg,
) -> Result<Response, ContractError> {
    match LIFECYCLE.load(deps.storage)? {
        Lifecycle::Template => return Err(ContractError::TemplateNotInitializable {}),
        Lifecycle::Initialized => return Err(ContractError::AlreadyInitialized {}),
        Lifecycle::Uninitialized => {}
    }
    check_no_funds(&info)?;

    let collection = msg.collection_details();
    collection.check_integrity()?;
    let owner = validate_address(deps.api, "owner", &msg.owner)?;
    let platform_admin = validate_address(deps.api, "platform_admin", &msg.platform_admin)?;
    let config = msg.config();
    config.check_integrity()?;

    PAYMENT_SPLITTER.register(deps.storage, deps.api, &msg.payees, &msg.shares)?;

    CONFIG.save(deps.storage, &config)?;
    COLLECTION.save(deps.storage, &collection)?;
    PHASE.save(deps.storage, &Phase::Restricted)?;
    MINTED_COUNT.save(deps.storage, &0)?;
    PAUSE_STATE.initialize(deps.storage)?;
    OWNER.set(deps.branch(), owner.clone())?;
    PLATFORM_ADMIN.save(deps.storage, &platform_admin)?;

    // Token storage, minting is reserved to this contract
    Cw721::default().contract_info.save(
        deps.storage,
        &ContractInfoResponse {
            name: collection.name.clone(),
            symbol: collection.symbol.clone(),
        },
    )?;
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(env.contract.address.as_str()))?;

    LIFECYCLE.save(deps.storage, &Lifecycle::Initialized)?;

    let event = Event::new("collection_setup")
        .add_attribute("name", collection.name)
        .add_attribute("symbol", collection.symbol)
        .add_attribute("max_supply", config.max_supply.to_string())
        .add_attribute("owner", owner.to_string());

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "setup")
        .add_attribute("owner", owner)
        .add_attribute("platform_admin", platform_admin))
}

pub fn execute_mint(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: u32,
    proof: Vec<HexBinary>,
) -> Result<Response, ContractError> {
    PAUSE_STATE.error_if_paused(deps.storage)?;
    ensure_initialized(deps.storage)?;

    let recipient = validate_address(deps.api, "recipient", &recipient)?;
    if amount == 0 {
        return Err(ValidationError::ZeroAmount {}.into());
    }

    let config = CONFIG.load(deps.storage)?;
    let phase = PHASE.load(deps.storage)?;
    let minted_count = MINTED_COUNT.load(deps.storage)?;

    // Check supply
    let new_minted_count = minted_count
        .checked_add(amount)
        .filter(|total| amount <= config.max_supply && *total <= config.max_supply)
        .ok_or(ContractError::MaxSupplyExceeded {
            requested: amount,
            minted: minted_count,
            max_supply: config.max_supply,
        })?;

    // Check the recipient's quota for this phase
    let terms = config.terms(phase);
    let mut user_details = USER_MINTING_DETAILS
        .may_load(deps.storage, recipient.clone())?
        .unwrap_or_default();
    let already_minted = user_details.minted_in(phase);
    if already_minted.saturating_add(amount) > terms.limit {
        return Err(ContractError::QuotaExceeded {
            phase,
            limit: terms.limit,
            minted: already_minted,
            requested: amount,
        });
    }

    // The allowlist gates the payer
    if phase == Phase::Restricted
        && !allowlist_proof::verify(&config.allowlist_root, info.sender.as_str(), &proof)
    {
        return Err(ContractError::AddressNotAllowlisted {
            address: info.sender,
        });
    }

    // Exact amount must be paid, proceeds stay here for the payees
    let paid = check_payment(&info, &config.mint_denom, terms.price, amount)?;

    let collection = COLLECTION.load(deps.storage)?;
    let nft = Cw721::default();
    let minter = MessageInfo {
        sender: env.contract.address.clone(),
        funds: vec![],
    };
    let first_token_id = minted_count + 1;
    for token_id in first_token_id..=new_minted_count {
        nft.execute(
            deps.branch(),
            env.clone(),
            minter.clone(),
            Cw721ExecuteMsg::Mint {
                token_id: token_id.to_string(),
                owner: recipient.to_string(),
                token_uri: Some(collection.token_uri(token_id)),
                extension: Empty {},
            },
        )?;
    }

    user_details.record(phase, amount);
    USER_MINTING_DETAILS.save(deps.storage, recipient.clone(), &user_details)?;
    MINTED_COUNT.save(deps.storage, &new_minted_count)?;

    let event = Event::new("mint_completed")
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("amount", amount.to_string())
        .add_attribute("phase", phase.to_string())
        .add_attribute("first_token_id", first_token_id.to_string())
        .add_attribute("last_token_id", new_minted_count.to_string());

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "mint")
        .add_attribute("minter", info.sender)
        .add_attribute("paid", paid))
}

pub fn execute_pause(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    check_no_funds(&info)?;
    OWNER.assert(deps.as_ref(), &info.sender)?;
    PAUSE_STATE.pause(deps.storage)?;
    Ok(Response::new().add_attribute("action", "pause"))
}

pub fn execute_unpause(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    check_no_funds(&info)?;
    OWNER.assert(deps.as_ref(), &info.sender)?;
    PAUSE_STATE.unpause(deps.storage)?;
    Ok(Response::new().add_attribute("action", "unpause"))
}

pub fn execute_set_phase(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    phase: Phase,
) -> Result<Response, ContractError> {
    check_no_funds(&info)?;
    OWNER.assert(deps.as_ref(), &info.sender)?;
    PHASE.save(deps.storage, &phase)?;

    Ok(Response::new()
        .add_event(Event::new("phase_changed").add_attribute("new_phase", phase.to_string()))
        .add_attribute("action", "set_phase"))
}

pub fn execute_change_quota(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    phase: Phase,
    limit: u32,
) -> Result<Response, ContractError> {
    check_no_funds(&info)?;
    OWNER.assert(deps.as_ref(), &info.sender)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.check_limit(limit)?;
    config.terms_mut(phase).limit = limit;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "change_quota")
        .add_attribute("phase", phase.to_string())
        .add_attribute("limit", limit.to_string()))
}

pub fn execute_change_price(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    phase: Phase,
    price: Uint128,
) -> Result<Response, ContractError> {
    check_no_funds(&info)?;
    OWNER.assert(deps.as_ref(), &info.sender)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.terms_mut(phase).price = price;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "change_price")
        .add_attribute("phase", phase.to_string())
        .add_attribute("price", price))
}

pub fn execute_update_owner(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    check_no_funds(&info)?;
    OWNER.assert(deps.as_ref(), &info.sender)?;
    let owner = validate_address(deps.api, "owner", &owner)?;
    OWNER.set(deps, owner.clone())?;

    Ok(Response::new()
        .add_attribute("action", "update_owner")
        .add_attribute("new_owner", owner))
}

pub fn execute_release(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    payee: String,
) -> Result<Response, ContractError> {
    check_no_funds(&info)?;
    ensure_initialized(deps.storage)?;
    let payee = validate_address(deps.api, "payee", &payee)?;
    let config = CONFIG.load(deps.storage)?;

    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.mint_denom)?
        .amount;
    let payout = PAYMENT_SPLITTER.release(deps.storage, balance, &payee, &config.mint_denom)?;

    Ok(Response::new()
        .add_message(payout)
        .add_attribute("action", "release")
        .add_attribute("payee", payee))
}

pub fn execute_nft(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: Cw721ExecuteMsg,
) -> Result<Response, ContractError> {
    check_no_funds(&info)?;
    ensure_initialized(deps.storage)?;
    if let Some(operation) = unsupported_nft_operation(&msg) {
        return Err(ContractError::UnsupportedOperation {
            operation: operation.to_string(),
        });
    }
    Ok(Cw721::default().execute(deps, env, info, msg)?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Phase {} => to_json_binary(&PHASE.load(deps.storage)?),
        QueryMsg::Price { phase } => to_json_binary(&query_price(deps, phase)?),
        QueryMsg::Name {} => to_json_binary(&COLLECTION.load(deps.storage)?.name),
        QueryMsg::Symbol {} => to_json_binary(&COLLECTION.load(deps.storage)?.symbol),
        QueryMsg::Uri {} => to_json_binary(&COLLECTION.load(deps.storage)?.uri),
        QueryMsg::TotalMinted {} => {
            to_json_binary(&MINTED_COUNT.may_load(deps.storage)?.unwrap_or_default())
        }
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Collection {} => to_json_binary(&COLLECTION.load(deps.storage)?),
        QueryMsg::Quota { phase } => to_json_binary(&query_quota(deps, phase)?),
        QueryMsg::UserMintingDetails { address } => {
            to_json_binary(&query_user_minting_details(deps, address)?)
        }
        QueryMsg::IsPaused {} => to_json_binary(&PAUSE_STATE.is_paused(deps.storage)?),
        QueryMsg::Lifecycle {} => to_json_binary(&LIFECYCLE.load(deps.storage)?),
        QueryMsg::Owner {} => to_json_binary(&OWNER.holder(deps)?),
        QueryMsg::PlatformAdmin {} => to_json_binary(&PLATFORM_ADMIN.load(deps.storage)?),
        QueryMsg::IsAllowlisted { address, proof } => {
            to_json_binary(&query_is_allowlisted(deps, address, proof)?)
        }
        QueryMsg::Payees {} => to_json_binary(&PAYMENT_SPLITTER.payees(deps.storage)?),
        QueryMsg::Releasable { payee } => to_json_binary(&query_releasable(deps, env, payee)?),
        QueryMsg::Nft(msg) => Cw721::default().query(deps, env, msg),
    }
}

fn query_price(deps: Deps, phase: Phase) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.terms(phase).price)
}

fn query_quota(deps: Deps, phase: Phase) -> StdResult<u32> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.terms(phase).limit)
}

fn query_user_minting_details(deps: Deps, address: String) -> StdResult<UserDetails> {
    let address = deps.api.addr_validate(&address)?;
    let user_details = USER_MINTING_DETAILS
        .may_load(deps.storage, address)?
        .unwrap_or_default();
    Ok(user_details)
}

fn query_is_allowlisted(deps: Deps, address: String, proof: Vec<HexBinary>) -> StdResult<bool> {
    let config = CONFIG.load(deps.storage)?;
    Ok(allowlist_proof::verify(
        &config.allowlist_root,
        &address,
        &proof,
    ))
}

fn query_releasable(deps: Deps, env: Env, payee: String) -> StdResult<Uint128> {
    let payee: Addr = deps.api.addr_validate(&payee)?;
    let config = CONFIG.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.mint_denom)?
        .amount;
    Ok(PAYMENT_SPLITTER.releasable(deps.storage, balance, &payee)?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous = get_contract_version(deps.storage)?;
    if previous.contract != CONTRACT_NAME {
        return Err(ContractError::CannotMigrate {
            previous_contract: previous.contract,
        });
    }
    let previous_version: Version = previous.version.parse()?;
    let new_version: Version = CONTRACT_VERSION.parse()?;
    if previous_version > new_version {
        return Err(ContractError::CannotDowngrade {
            previous_version: previous.version,
            new_version: CONTRACT_VERSION.to_string(),
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", previous.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
