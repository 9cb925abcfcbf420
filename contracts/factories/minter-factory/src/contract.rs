#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Order, Reply, Response,
    StdResult, SubMsg, WasmMsg,
};
use cw2::{get_contract_version, set_contract_version};
use cw_storage_plus::Bound;
use cw_utils::{nonpayable, parse_reply_instantiate_data};
use semver::Version;

use launchpad_phased_minter::msg::{
    ExecuteMsg as MinterExecuteMsg, InstantiateMsg as MinterInstantiateMsg,
};
use minter_types::error::ValidationError;
use minter_types::msg::SetupMsg;
use minter_types::utils::{check_not_empty, validate_address};

use crate::error::ContractError;
use crate::msg::{
    CreateInstanceResponse, ExecuteMsg, InstancesResponse, InstantiateMsg, MigrateMsg,
    ParamsResponse, QueryMsg,
};
use crate::state::{
    FactoryParams, PendingCreation, INSTANCES, INSTANCE_COUNT, OWNER, PARAMS, PENDING_CREATION,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:launchpad-minter-factory";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CREATE_INSTANCE_REPLY_ID: u64 = 1;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    check_no_funds(&info)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => validate_address(deps.api, "owner", &owner)?,
        None => info.sender,
    };
    let template = validate_address(deps.api, "template", &msg.template)?;
    let default_platform_admin =
        validate_address(deps.api, "default_platform_admin", &msg.default_platform_admin)?;
    check_not_empty("product_label", &msg.product_label)?;

    let params = FactoryParams {
        template,
        default_platform_admin,
        product_label: msg.product_label,
    };
    PARAMS.save(deps.storage, &params)?;
    OWNER.set(deps.branch(), owner.clone())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("template", params.template))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateInstance { msg } => execute_create_instance(deps, env, info, msg),
        ExecuteMsg::ChangeTemplate { template } => {
            execute_change_template(deps, env, info, template)
        }
        ExecuteMsg::ChangeDefaultPlatformAdmin { admin } => {
            execute_change_default_platform_admin(deps, env, info, admin)
        }
        ExecuteMsg::UpdateOwner { owner } => execute_update_owner(deps, env, info, owner),
    }
}

fn check_no_funds(info: &MessageInfo) -> Result<(), ContractError> {
    nonpayable(info).map_err(|_| ContractError::FundsNotAccepted {})?;
    Ok(())
}

fn execute_create_instance(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    setup: SetupMsg,
) -> Result<Response, ContractError> {
    check_no_funds(&info)?;
    OWNER.assert(deps.as_ref(), &info.sender)?;
    let params = PARAMS.load(deps.storage)?;

    // New instances run the template's code
    let code_id = deps
        .querier
        .query_wasm_contract_info(params.template.to_string())?
        .code_id;

    PENDING_CREATION.save(
        deps.storage,
        &PendingCreation {
            creator: info.sender.clone(),
            setup,
        },
    )?;

    let instantiate_msg = WasmMsg::Instantiate {
        admin: Some(info.sender.to_string()),
        code_id,
        msg: to_json_binary(&MinterInstantiateMsg::Instance {})?,
        funds: vec![],
        label: params.product_label,
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(
            instantiate_msg,
            CREATE_INSTANCE_REPLY_ID,
        ))
        .add_attribute("action", "create_instance")
        .add_attribute("code_id", code_id.to_string()))
}

fn execute_change_template(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    template: String,
) -> Result<Response, ContractError> {
    check_no_funds(&info)?;
    OWNER.assert(deps.as_ref(), &info.sender)?;
    let mut params = PARAMS.load(deps.storage)?;
    let template = validate_address(deps.api, "template", &template)?;
    if template == params.template {
        return Err(ValidationError::SameTemplate {}.into());
    }
    params.template = template.clone();
    PARAMS.save(deps.storage, &params)?;

    Ok(Response::new()
        .add_event(Event::new("template_changed").add_attribute("new_template", template))
        .add_attribute("action", "change_template"))
}

fn execute_change_default_platform_admin(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    check_no_funds(&info)?;
    OWNER.assert(deps.as_ref(), &info.sender)?;
    let mut params = PARAMS.load(deps.storage)?;
    // Must be set and must change
    let admin = validate_address(deps.api, "default_platform_admin", &admin)?;
    if admin == params.default_platform_admin {
        return Err(ValidationError::SameDefaultPlatformAdmin {}.into());
    }
    params.default_platform_admin = admin.clone();
    PARAMS.save(deps.storage, &params)?;

    Ok(Response::new()
        .add_attribute("action", "change_default_platform_admin")
        .add_attribute("new_default_platform_admin", admin))
}

fn execute_update_owner(
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

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        CREATE_INSTANCE_REPLY_ID => reply_create_instance(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

/// Registers the new instance and sets it up in the same transaction, a
/// failing setup undoes the whole creation.
fn reply_create_instance(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let res = parse_reply_instantiate_data(msg)?;
    let instance = deps.api.addr_validate(&res.contract_address)?;
    let pending = PENDING_CREATION.load(deps.storage)?;
    PENDING_CREATION.remove(deps.storage);

    let index = INSTANCE_COUNT
        .may_load(deps.storage, &pending.creator)?
        .unwrap_or_default();
    INSTANCES.save(deps.storage, (&pending.creator, index), &instance)?;
    INSTANCE_COUNT.save(deps.storage, &pending.creator, &(index + 1))?;

    let setup_msg = WasmMsg::Execute {
        contract_addr: instance.to_string(),
        msg: to_json_binary(&MinterExecuteMsg::Setup(pending.setup))?,
        funds: vec![],
    };
    let event = Event::new("instance_created")
        .add_attribute("instance", instance.to_string())
        .add_attribute("creator", pending.creator.to_string());

    Ok(Response::new()
        .add_message(setup_msg)
        .add_event(event)
        .set_data(to_json_binary(&CreateInstanceResponse { instance })?))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Params {} => to_json_binary(&query_params(deps)?),
        QueryMsg::Owner {} => to_json_binary(&OWNER.holder(deps)?),
        QueryMsg::InstancesByCreator {
            creator,
            start_after,
            limit,
        } => to_json_binary(&query_instances_by_creator(
            deps,
            creator,
            start_after,
            limit,
        )?),
        QueryMsg::InstanceCount { creator } => {
            to_json_binary(&query_instance_count(deps, creator)?)
        }
    }
}

fn query_params(deps: Deps) -> StdResult<ParamsResponse> {
    let params = PARAMS.load(deps.storage)?;
    Ok(ParamsResponse { params })
}

fn query_instances_by_creator(
    deps: Deps,
    creator: String,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<InstancesResponse> {
    let creator = deps.api.addr_validate(&creator)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let instances = INSTANCES
        .prefix(&creator)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, instance)| instance))
        .collect::<StdResult<Vec<Addr>>>()?;
    Ok(InstancesResponse { instances })
}

fn query_instance_count(deps: Deps, creator: String) -> StdResult<u32> {
    let creator = deps.api.addr_validate(&creator)?;
    Ok(INSTANCE_COUNT
        .may_load(deps.storage, &creator)?
        .unwrap_or_default())
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
