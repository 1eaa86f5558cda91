//! Ash Token Module
//!
//! Taxed, reflection-bearing fungible token ledger:
//! - Transfer engine applying the bucketed transaction tax
//! - Exemption registry for untaxed accounts
//! - Owner administration and stuck-token recovery

pub mod config;
pub mod engine;
pub mod error;
pub mod exemptions;
pub mod token;

pub use config::TokenConfig;
pub use engine::{FeeDestinations, TransferEngine};
pub use error::{Result, TokenError};
pub use exemptions::ExemptionRegistry;
pub use token::{ExternalToken, Token};
