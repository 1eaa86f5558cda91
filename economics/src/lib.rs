//! Ash Token Economics Module
//!
//! Implements the tax model including:
//! - Fixed-point percentage arithmetic
//! - Named fee buckets decomposing the transfer tax
//! - Directional (buy/sell/transfer) tax resolution

pub mod fees;
pub mod percent;

pub use fees::{FeeBreakdown, FeeError, FeeSchedule, Result, TransferDirection};
pub use percent::FixedPointPercent;

/// Economic constants
pub mod constants {
    /// Denominator for schedule rates (1000 = 100%)
    pub const PER_MILLE: u64 = 1000;

    /// Denominator for composed effective rates (100,000 = 100%)
    pub const PERCENT_SCALE: u64 = 100_000;

    /// Default DAO fund share of the transfer tax (800 = 80%)
    pub const DEFAULT_DAO_FEE: u64 = 800;

    /// Default marketing share of the transfer tax (135 = 13.5%)
    pub const DEFAULT_MARKETING_FEE: u64 = 135;

    /// Default liquidity share of the transfer tax (25 = 2.5%)
    pub const DEFAULT_LIQUIDITY_FEE: u64 = 25;

    /// Default reflection share of the transfer tax (25 = 2.5%)
    pub const DEFAULT_REFLECTION_FEE: u64 = 25;

    /// Default burn share of the transfer tax (15 = 1.5%)
    pub const DEFAULT_BURN_FEE: u64 = 15;

    /// Default transfer tax (100 = 10%)
    pub const DEFAULT_TRANSFER_FEE: u64 = 100;

    /// Default buy-side tax cap (100 = 10%)
    pub const DEFAULT_MAX_BUY_FEE: u64 = 100;

    /// Default sell-side tax cap (100 = 10%)
    pub const DEFAULT_MAX_SELL_FEE: u64 = 100;
}
