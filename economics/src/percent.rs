//! Fixed-point percentage arithmetic
//!
//! Every percentage computation in the workspace goes through this type:
//! integer parts-per-100,000, multiplying before dividing so precision is
//! only lost at the final truncation.

use crate::constants::{PERCENT_SCALE, PER_MILLE};
use serde::{Deserialize, Serialize};

/// Integer percentage in parts per 100,000
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct FixedPointPercent(u64);

impl FixedPointPercent {
    pub const ZERO: FixedPointPercent = FixedPointPercent(0);
    pub const ONE_HUNDRED: FixedPointPercent = FixedPointPercent(PERCENT_SCALE);

    /// From a parts-per-1000 rate
    pub fn from_per_mille(per_mille: u64) -> Self {
        FixedPointPercent(per_mille * (PERCENT_SCALE / PER_MILLE))
    }

    /// Effective rate of a per-mille bucket share of a per-mille tax.
    ///
    /// A DAO bucket of 800 per-mille on a 100 per-mille transfer tax comes
    /// out at 8,000 parts-per-100,000 of the gross amount: 8%.
    pub fn compose(bucket_per_mille: u64, tax_per_mille: u64) -> Self {
        // bucket/1000 of tax/1000 == bucket * tax / 10 per 100,000
        FixedPointPercent(bucket_per_mille * tax_per_mille / 10)
    }

    pub fn parts(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `amount * parts / 100,000`, truncating.
    ///
    /// The multiplication goes first; with amounts bounded by any realistic
    /// token supply there is orders-of-magnitude u128 headroom left.
    pub fn apply(&self, amount: u128) -> u128 {
        amount * self.0 as u128 / PERCENT_SCALE as u128
    }
}
