use cosmwasm_schema::cw_serde;

use crate::error::ValidationError;
use crate::utils::check_not_empty;

pub const MAX_NAME_LENGTH: usize = 256;
pub const MAX_SYMBOL_LENGTH: usize = 64;
pub const MAX_URI_LENGTH: usize = 512;

#[cw_serde]
pub struct CollectionDetails {
    pub name: String,
    pub symbol: String,
    /// Base uri, token `n` resolves to `{uri}/{n}`
    pub uri: String,
}

impl CollectionDetails {
    pub fn token_uri(&self, token_id: u32) -> String {
        format!("{}/{}", self.uri.trim_end_matches('/'), token_id)
    }

    pub fn check_integrity(&self) -> Result<(), ValidationError> {
        check_not_empty("name", &self.name)?;
        check_not_empty("symbol", &self.symbol)?;
        check_not_empty("uri", &self.uri)?;

        for (field, value, max) in [
            ("name", &self.name, MAX_NAME_LENGTH),
            ("symbol", &self.symbol, MAX_SYMBOL_LENGTH),
            ("uri", &self.uri, MAX_URI_LENGTH),
        ] {
            if value.chars().count() > max {
                return Err(ValidationError::FieldTooLong {
                    field: field.to_string(),
                    max,
                });
            }
        }
        Ok(())
    }
}
