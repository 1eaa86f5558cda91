//! Ledger error types

use thiserror::Error;

/// Reflection ledger errors
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger already initialized")]
    AlreadyInitialized,

    #[error("Ledger not initialized")]
    NotInitialized,

    #[error("Total supply must be greater than zero")]
    ZeroSupply,

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: u128, available: u128 },

    #[error("Amount {requested} exceeds circulating supply {circulating}")]
    Underflow { requested: u128, circulating: u128 },

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Snapshot IO error: {0}")]
    SnapshotIo(#[from] std::io::Error),

    #[error("Snapshot format error: {0}")]
    SnapshotFormat(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
