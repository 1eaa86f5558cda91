//! Supply statistics

use serde::{Deserialize, Serialize};

/// Running supply counters reported by the ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplyStats {
    pub initial_supply: u128,
    pub tokens_in_circulation: u128,
    pub total_burned: u128,
    pub total_reflected: u128,
}

impl SupplyStats {
    /// Supply destroyed since genesis
    pub fn destroyed(&self) -> u128 {
        self.initial_supply.saturating_sub(self.tokens_in_circulation)
    }
}
