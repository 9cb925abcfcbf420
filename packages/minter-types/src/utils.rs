use cosmwasm_std::{Addr, Api};

use crate::error::ValidationError;

/// Validates a user supplied address, telling an empty value apart from a
/// malformed one.
pub fn validate_address(api: &dyn Api, field: &str, address: &str) -> Result<Addr, ValidationError> {
    if address.trim().is_empty() {
        return Err(ValidationError::ZeroAddress {
            field: field.to_string(),
        });
    }
    api.addr_validate(address)
        .map_err(|_| ValidationError::InvalidAddress {
            field: field.to_string(),
            address: address.to_string(),
        })
}

pub fn check_not_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(())
}
