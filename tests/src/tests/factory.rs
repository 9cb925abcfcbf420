use cosmwasm_std::{coins, Addr, Uint128};
use cw_multi_test::Executor;

use launchpad_minter_factory::error::ContractError as FactoryContractError;
use launchpad_minter_factory::msg::{
    ExecuteMsg as FactoryExecuteMsg, InstancesResponse, ParamsResponse,
    QueryMsg as FactoryQueryMsg,
};
use launchpad_phased_minter::error::ContractError as MinterContractError;
use launchpad_phased_minter::msg::{
    ExecuteMsg as MinterExecuteMsg, InstantiateMsg as MinterInstantiateMsg,
    QueryMsg as MinterQueryMsg,
};
use minter_types::access::{AccessError, Role};
use minter_types::error::{ErrorKind, ValidationError};
use minter_types::types::{Lifecycle, Phase};

use crate::helpers::mock_messages::return_setup_msg;
use crate::helpers::setup::{setup, DENOM, PRODUCT_LABEL};
use crate::helpers::utils::{
    contract_error, create_instance, find_event_attribute, get_contract_address_from_res,
    mint_to_address,
};

#[test]
fn test_create_instance() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let creator = res.test_accounts.creator;
    let platform = res.test_accounts.platform;
    let minter_code_id = res.minter_code_id;
    let template = res.template;
    let factory = res.factory;
    let mut app = res.app;

    let params: ParamsResponse = app
        .wrap()
        .query_wasm_smart(&factory, &FactoryQueryMsg::Params {})
        .unwrap();
    assert_eq!(params.params.template, template);
    assert_eq!(params.params.default_platform_admin, platform);
    assert_eq!(params.params.product_label, PRODUCT_LABEL);

    let setup_msg = return_setup_msg(&creator, &platform);
    let res = app
        .execute_contract(
            admin.clone(),
            factory.clone(),
            &FactoryExecuteMsg::CreateInstance {
                msg: setup_msg.clone(),
            },
            &[],
        )
        .unwrap();
    let instance = Addr::unchecked(get_contract_address_from_res(res.clone()));
    assert_eq!(
        find_event_attribute(&res, "wasm-instance_created", "instance"),
        Some(instance.to_string())
    );
    assert_eq!(
        find_event_attribute(&res, "wasm-instance_created", "creator"),
        Some(admin.to_string())
    );
    assert_eq!(
        find_event_attribute(&res, "wasm-collection_setup", "name"),
        Some(setup_msg.name.clone())
    );

    // Instance runs the template's code and is already set up
    let contract_info = app.wrap().query_wasm_contract_info(&instance).unwrap();
    assert_eq!(contract_info.code_id, minter_code_id);
    assert_eq!(contract_info.admin, Some(admin.to_string()));

    let lifecycle: Lifecycle = app
        .wrap()
        .query_wasm_smart(&instance, &MinterQueryMsg::Lifecycle {})
        .unwrap();
    assert_eq!(lifecycle, Lifecycle::Initialized);
    let phase: Phase = app
        .wrap()
        .query_wasm_smart(&instance, &MinterQueryMsg::Phase {})
        .unwrap();
    assert_eq!(phase, Phase::Restricted);
    let name: String = app
        .wrap()
        .query_wasm_smart(&instance, &MinterQueryMsg::Name {})
        .unwrap();
    assert_eq!(name, "Phased Collection");
    let owner: Option<Addr> = app
        .wrap()
        .query_wasm_smart(&instance, &MinterQueryMsg::Owner {})
        .unwrap();
    assert_eq!(owner, Some(creator.clone()));
    let platform_admin: Addr = app
        .wrap()
        .query_wasm_smart(&instance, &MinterQueryMsg::PlatformAdmin {})
        .unwrap();
    assert_eq!(platform_admin, platform);
    let price: Uint128 = app
        .wrap()
        .query_wasm_smart(
            &instance,
            &MinterQueryMsg::Price {
                phase: Phase::Restricted,
            },
        )
        .unwrap();
    assert_eq!(price, setup_msg.restricted_price);
    let total_minted: u32 = app
        .wrap()
        .query_wasm_smart(&instance, &MinterQueryMsg::TotalMinted {})
        .unwrap();
    assert_eq!(total_minted, 0);

    // Registered under the creating account
    let instances: InstancesResponse = app
        .wrap()
        .query_wasm_smart(
            &factory,
            &FactoryQueryMsg::InstancesByCreator {
                creator: admin.to_string(),
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(instances.instances, vec![instance.clone()]);

    // A second instance is a separate contract
    let second = create_instance(
        &mut app,
        &factory,
        &admin,
        return_setup_msg(&creator, &platform),
    );
    assert_ne!(second, instance);
    let count: u32 = app
        .wrap()
        .query_wasm_smart(
            &factory,
            &FactoryQueryMsg::InstanceCount {
                creator: admin.to_string(),
            },
        )
        .unwrap();
    assert_eq!(count, 2);
}

#[test]
fn test_create_instance_explicit_platform_admin() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let creator = res.test_accounts.creator;
    let platform = res.test_accounts.platform;
    let mut app = res.app;

    let mut setup_msg = return_setup_msg(&creator, &platform);
    setup_msg.platform_admin = "operator".to_string();
    let instance = create_instance(&mut app, &res.factory, &admin, setup_msg);

    let platform_admin: Addr = app
        .wrap()
        .query_wasm_smart(&instance, &MinterQueryMsg::PlatformAdmin {})
        .unwrap();
    assert_eq!(platform_admin, Addr::unchecked("operator"));
}

#[test]
fn test_create_instance_without_platform_admin() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let creator = res.test_accounts.creator;
    let platform = res.test_accounts.platform;
    let factory = res.factory;
    let mut app = res.app;

    let mut setup_msg = return_setup_msg(&creator, &platform);
    setup_msg.platform_admin = String::new();
    let error = app
        .execute_contract(
            admin.clone(),
            factory.clone(),
            &FactoryExecuteMsg::CreateInstance { msg: setup_msg },
            &[],
        )
        .unwrap_err();
    let error = contract_error::<MinterContractError>(&error);
    assert_eq!(
        error,
        &MinterContractError::Validation(ValidationError::ZeroAddress {
            field: "platform_admin".to_string()
        })
    );
    assert_eq!(error.kind(), ErrorKind::Validation);

    let count: u32 = app
        .wrap()
        .query_wasm_smart(
            &factory,
            &FactoryQueryMsg::InstanceCount {
                creator: admin.to_string(),
            },
        )
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_failed_setup_reverts_creation() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let creator = res.test_accounts.creator;
    let platform = res.test_accounts.platform;
    let factory = res.factory;
    let mut app = res.app;

    let mut setup_msg = return_setup_msg(&creator, &platform);
    setup_msg.max_supply = 0;
    let error = app
        .execute_contract(
            admin.clone(),
            factory.clone(),
            &FactoryExecuteMsg::CreateInstance { msg: setup_msg },
            &[],
        )
        .unwrap_err();
    let error = contract_error::<MinterContractError>(&error);
    assert_eq!(
        error,
        &MinterContractError::Validation(ValidationError::ZeroMaxSupply {})
    );
    assert_eq!(error.kind(), ErrorKind::Validation);

    let mut setup_msg = return_setup_msg(&creator, &platform);
    setup_msg.shares = vec![100];
    app.execute_contract(
        admin.clone(),
        factory.clone(),
        &FactoryExecuteMsg::CreateInstance { msg: setup_msg },
        &[],
    )
    .unwrap_err();

    // Nothing was registered
    let count: u32 = app
        .wrap()
        .query_wasm_smart(
            &factory,
            &FactoryQueryMsg::InstanceCount {
                creator: admin.to_string(),
            },
        )
        .unwrap();
    assert_eq!(count, 0);
    let instances: InstancesResponse = app
        .wrap()
        .query_wasm_smart(
            &factory,
            &FactoryQueryMsg::InstancesByCreator {
                creator: admin.to_string(),
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert!(instances.instances.is_empty());
}

#[test]
fn test_create_instance_authorization() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let creator = res.test_accounts.creator;
    let platform = res.test_accounts.platform;
    let factory = res.factory;
    let mut app = res.app;

    let error = app
        .execute_contract(
            creator.clone(),
            factory.clone(),
            &FactoryExecuteMsg::CreateInstance {
                msg: return_setup_msg(&creator, &platform),
            },
            &[],
        )
        .unwrap_err();
    let error = contract_error::<FactoryContractError>(&error);
    assert_eq!(
        error,
        &FactoryContractError::Access(AccessError::Unauthorized {
            role: Role::FactoryOwner,
            sender: creator.clone(),
        })
    );
    assert_eq!(error.kind(), ErrorKind::Authorization);

    // Funds are refused
    mint_to_address(&mut app, admin.to_string(), coins(10, DENOM));
    let error = app
        .execute_contract(
            admin.clone(),
            factory.clone(),
            &FactoryExecuteMsg::CreateInstance {
                msg: return_setup_msg(&creator, &platform),
            },
            &coins(1, DENOM),
        )
        .unwrap_err();
    assert_eq!(
        contract_error::<FactoryContractError>(&error),
        &FactoryContractError::FundsNotAccepted {}
    );

    // Ownership moves with update_owner
    app.execute_contract(
        admin.clone(),
        factory.clone(),
        &FactoryExecuteMsg::UpdateOwner {
            owner: creator.to_string(),
        },
        &[],
    )
    .unwrap();
    let owner: Option<Addr> = app
        .wrap()
        .query_wasm_smart(&factory, &FactoryQueryMsg::Owner {})
        .unwrap();
    assert_eq!(owner, Some(creator.clone()));
    create_instance(
        &mut app,
        &factory,
        &creator,
        return_setup_msg(&creator, &platform),
    );
    app.execute_contract(
        admin.clone(),
        factory,
        &FactoryExecuteMsg::CreateInstance {
            msg: return_setup_msg(&creator, &platform),
        },
        &[],
    )
    .unwrap_err();
}

#[test]
fn test_change_template() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let creator = res.test_accounts.creator;
    let platform = res.test_accounts.platform;
    let factory = res.factory;
    let mut app = res.app;

    let new_template = app
        .instantiate_contract(
            res.minter_code_id,
            admin.clone(),
            &MinterInstantiateMsg::Template {},
            &[],
            "template-v2",
            None,
        )
        .unwrap();

    // Same template is rejected
    let error = app
        .execute_contract(
            admin.clone(),
            factory.clone(),
            &FactoryExecuteMsg::ChangeTemplate {
                template: res.template.to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        contract_error::<FactoryContractError>(&error),
        &FactoryContractError::Validation(ValidationError::SameTemplate {})
    );

    // Only the factory owner
    app.execute_contract(
        creator.clone(),
        factory.clone(),
        &FactoryExecuteMsg::ChangeTemplate {
            template: new_template.to_string(),
        },
        &[],
    )
    .unwrap_err();

    let res = app
        .execute_contract(
            admin.clone(),
            factory.clone(),
            &FactoryExecuteMsg::ChangeTemplate {
                template: new_template.to_string(),
            },
            &[],
        )
        .unwrap();
    assert_eq!(
        find_event_attribute(&res, "wasm-template_changed", "new_template"),
        Some(new_template.to_string())
    );
    let params: ParamsResponse = app
        .wrap()
        .query_wasm_smart(&factory, &FactoryQueryMsg::Params {})
        .unwrap();
    assert_eq!(params.params.template, new_template);

    // Templates themselves can never be set up
    let error = app
        .execute_contract(
            admin.clone(),
            new_template.clone(),
            &MinterExecuteMsg::Setup(return_setup_msg(&creator, &platform)),
            &[],
        )
        .unwrap_err();
    let error = contract_error::<MinterContractError>(&error);
    assert_eq!(error, &MinterContractError::TemplateNotInitializable {});
    assert_eq!(error.kind(), ErrorKind::Lifecycle);

    // Instances still get created
    create_instance(
        &mut app,
        &factory,
        &admin,
        return_setup_msg(&creator, &platform),
    );
}

#[test]
fn test_change_default_platform_admin() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let creator = res.test_accounts.creator;
    let platform = res.test_accounts.platform;
    let factory = res.factory;
    let mut app = res.app;

    let error = app
        .execute_contract(
            admin.clone(),
            factory.clone(),
            &FactoryExecuteMsg::ChangeDefaultPlatformAdmin {
                admin: platform.to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        contract_error::<FactoryContractError>(&error),
        &FactoryContractError::Validation(ValidationError::SameDefaultPlatformAdmin {})
    );

    let error = app
        .execute_contract(
            admin.clone(),
            factory.clone(),
            &FactoryExecuteMsg::ChangeDefaultPlatformAdmin {
                admin: String::new(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        contract_error::<FactoryContractError>(&error),
        &FactoryContractError::Validation(ValidationError::ZeroAddress {
            field: "default_platform_admin".to_string()
        })
    );

    app.execute_contract(
        admin.clone(),
        factory.clone(),
        &FactoryExecuteMsg::ChangeDefaultPlatformAdmin {
            admin: "operator".to_string(),
        },
        &[],
    )
    .unwrap();

    let params: ParamsResponse = app
        .wrap()
        .query_wasm_smart(&factory, &FactoryQueryMsg::Params {})
        .unwrap();
    assert_eq!(params.params.default_platform_admin, Addr::unchecked("operator"));

    // Instances keep the platform admin of their setup message
    let instance = create_instance(
        &mut app,
        &factory,
        &admin,
        return_setup_msg(&creator, &platform),
    );
    let platform_admin: Addr = app
        .wrap()
        .query_wasm_smart(&instance, &MinterQueryMsg::PlatformAdmin {})
        .unwrap();
    assert_eq!(platform_admin, platform);
}

#[test]
fn test_instance_setup_is_one_shot() {
    let res = setup();
    let admin = res.test_accounts.admin;
    let creator = res.test_accounts.creator;
    let platform = res.test_accounts.platform;
    let mut app = res.app;

    let instance = create_instance(
        &mut app,
        &res.factory,
        &admin,
        return_setup_msg(&creator, &platform),
    );
    let error = app
        .execute_contract(
            creator.clone(),
            instance,
            &MinterExecuteMsg::Setup(return_setup_msg(&creator, &platform)),
            &[],
        )
        .unwrap_err();
    assert_eq!(
        contract_error::<MinterContractError>(&error),
        &MinterContractError::AlreadyInitialized {}
    );
}
