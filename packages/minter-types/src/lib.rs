pub mod access;
pub mod collection_details;
pub mod config;
pub mod error;
pub mod msg;
pub mod types;
pub mod utils;
