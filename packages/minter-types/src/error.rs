use thiserror::Error;

/// Broad category of a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Authorization,
    Capacity,
    Proof,
    Payment,
    Lifecycle,
    Unsupported,
    /// Storage or host failure not caused by the caller's input
    Runtime,
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: String },

    #[error("{field} is longer than {max} characters")]
    FieldTooLong { field: String, max: usize },

    #[error("{field} must not be the zero address")]
    ZeroAddress { field: String },

    #[error("invalid address for {field}: {address}")]
    InvalidAddress { field: String, address: String },

    #[error("max supply must be greater than zero")]
    ZeroMaxSupply {},

    #[error("limit {limit} exceeds max supply {max_supply}")]
    LimitExceedsSupply { limit: u32, max_supply: u32 },

    #[error("allowlist root must be 32 bytes, got {length}")]
    InvalidAllowlistRoot { length: usize },

    #[error("amount must be greater than zero")]
    ZeroAmount {},

    #[error("template is unchanged")]
    SameTemplate {},

    #[error("default platform admin is unchanged")]
    SameDefaultPlatformAdmin {},
}
