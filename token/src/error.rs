//! Token error types

use ash_core::{Address, AddressError, LedgerError};
use ash_economics::FeeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Caller {0} is not the owner")]
    Unauthorized(Address),

    #[error("Fee error: {0}")]
    Fee(#[from] FeeError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Insufficient allowance: requested {requested}, available {available}")]
    InsufficientAllowance { requested: u128, available: u128 },

    #[error("Config IO error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No handler for external token {0}")]
    UnknownToken(Address),
}

pub type Result<T> = std::result::Result<T, TokenError>;
