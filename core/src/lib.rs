//! Ash Coin Core Library
//!
//! Share-based reflection ledger for the Ash token

pub mod address;
pub mod error;
pub mod reflection;
pub mod snapshot;
pub mod supply;

// Re-export main types
pub use address::{Address, AddressError, ADDRESS_LEN};
pub use error::{LedgerError, Result};
pub use reflection::ReflectionLedger;
pub use supply::SupplyStats;
