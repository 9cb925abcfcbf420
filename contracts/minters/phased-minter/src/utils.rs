use cosmwasm_std::{MessageInfo, Storage, Uint128};
use cw_utils::{may_pay, nonpayable};
use minter_types::types::Lifecycle;

use crate::error::ContractError;
use crate::msg::Cw721ExecuteMsg;
use crate::state::LIFECYCLE;

pub fn ensure_initialized(storage: &dyn Storage) -> Result<(), ContractError> {
    match LIFECYCLE.may_load(storage)? {
        Some(Lifecycle::Initialized) => Ok(()),
        _ => Err(ContractError::NotInitialized {}),
    }
}

/// Only mint takes funds, anything else sent along is refused.
pub fn check_no_funds(info: &MessageInfo) -> Result<(), ContractError> {
    nonpayable(info).map_err(|_| ContractError::FundsNotAccepted {})?;
    Ok(())
}

/// Requires exactly `price * amount` of `denom`.
pub fn check_payment(
    info: &MessageInfo,
    denom: &str,
    price: Uint128,
    amount: u32,
) -> Result<Uint128, ContractError> {
    let expected = price
        .checked_mul(Uint128::from(amount))
        .map_err(|_| ContractError::PriceOverflow {})?;
    let sent = may_pay(info, denom)?;
    if sent != expected {
        return Err(ContractError::IncorrectPaymentAmount { expected, sent });
    }
    Ok(sent)
}

/// cw721 messages that would go around the issuance rules.
pub fn unsupported_nft_operation(msg: &Cw721ExecuteMsg) -> Option<&'static str> {
    match msg {
        Cw721ExecuteMsg::TransferNft { .. }
        | Cw721ExecuteMsg::SendNft { .. }
        | Cw721ExecuteMsg::Approve { .. }
        | Cw721ExecuteMsg::Revoke { .. }
        | Cw721ExecuteMsg::ApproveAll { .. }
        | Cw721ExecuteMsg::RevokeAll { .. }
        | Cw721ExecuteMsg::Burn { .. } => None,
        Cw721ExecuteMsg::Mint { .. } => Some("mint"),
        Cw721ExecuteMsg::Extension { .. } => Some("extension"),
        _ => Some("nft_admin"),
    }
}
