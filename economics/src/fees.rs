//! Fee schedule and tax breakdown
//!
//! The transfer tax is decomposed into named buckets (dao, marketing,
//! liquidity, reflection, burn), each a per-mille share of the tax. Buy and
//! sell transfers against the liquidity pool use their own capped rates in
//! place of the base transfer tax.

use crate::constants::PER_MILLE;
use crate::percent::FixedPointPercent;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeeError {
    #[error("Invalid fee configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, FeeError>;

/// Transfer direction relative to the liquidity-pool counterparty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferDirection {
    /// Tokens leaving the liquidity pool toward a holder
    Buy,
    /// Tokens moving from a holder into the liquidity pool
    Sell,
    /// Wallet-to-wallet transfer
    Generic,
}

/// Named fee buckets plus directional caps, all parts-per-1000.
///
/// A schedule can only be constructed validated: each rate is at most 1000
/// and the five buckets never claim more than the whole transfer tax.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeeSchedule {
    dao_fee: u64,
    marketing_fee: u64,
    liquidity_fee: u64,
    reflection_fee: u64,
    burn_fee: u64,
    transfer_fee: u64,
    max_buy_fee: u64,
    max_sell_fee: u64,
}

/// One transfer's gross amount split into net plus tax buckets.
///
/// The six fields always sum exactly to the gross amount; rounding residue
/// from the bucket computations folds into `net`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FeeBreakdown {
    pub net: u128,
    pub dao: u128,
    pub marketing: u128,
    pub liquidity: u128,
    pub reflection: u128,
    pub burn: u128,
}

impl FeeBreakdown {
    /// Breakdown of an untaxed transfer
    pub fn untaxed(gross: u128) -> Self {
        FeeBreakdown {
            net: gross,
            ..Default::default()
        }
    }

    pub fn total_tax(&self) -> u128 {
        self.dao + self.marketing + self.liquidity + self.reflection + self.burn
    }

    pub fn gross(&self) -> u128 {
        self.net + self.total_tax()
    }
}

impl FeeSchedule {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dao_fee: u64,
        marketing_fee: u64,
        liquidity_fee: u64,
        reflection_fee: u64,
        burn_fee: u64,
        transfer_fee: u64,
        max_buy_fee: u64,
        max_sell_fee: u64,
    ) -> Result<Self> {
        let schedule = FeeSchedule {
            dao_fee,
            marketing_fee,
            liquidity_fee,
            reflection_fee,
            burn_fee,
            transfer_fee,
            max_buy_fee,
            max_sell_fee,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    fn validate(&self) -> Result<()> {
        let rates = [
            ("dao", self.dao_fee),
            ("marketing", self.marketing_fee),
            ("liquidity", self.liquidity_fee),
            ("reflection", self.reflection_fee),
            ("burn", self.burn_fee),
            ("transfer", self.transfer_fee),
            ("max buy", self.max_buy_fee),
            ("max sell", self.max_sell_fee),
        ];

        for (name, rate) in rates {
            if rate > PER_MILLE {
                return Err(FeeError::InvalidConfiguration(format!(
                    "{} fee {} exceeds the {} per-mille ceiling",
                    name, rate, PER_MILLE
                )));
            }
        }

        // The buckets decompose the transfer tax; together they may claim
        // at most the whole of it.
        let bucket_sum = self.dao_fee
            + self.marketing_fee
            + self.liquidity_fee
            + self.reflection_fee
            + self.burn_fee;
        if bucket_sum > PER_MILLE {
            return Err(FeeError::InvalidConfiguration(format!(
                "fee buckets sum to {} per-mille of the transfer tax, exceeding {}",
                bucket_sum, PER_MILLE
            )));
        }

        Ok(())
    }

    pub fn dao_fee(&self) -> u64 {
        self.dao_fee
    }

    pub fn marketing_fee(&self) -> u64 {
        self.marketing_fee
    }

    pub fn liquidity_fee(&self) -> u64 {
        self.liquidity_fee
    }

    pub fn reflection_fee(&self) -> u64 {
        self.reflection_fee
    }

    pub fn burn_fee(&self) -> u64 {
        self.burn_fee
    }

    pub fn transfer_fee(&self) -> u64 {
        self.transfer_fee
    }

    pub fn max_buy_fee(&self) -> u64 {
        self.max_buy_fee
    }

    pub fn max_sell_fee(&self) -> u64 {
        self.max_sell_fee
    }

    /// Tax rate applicable to one transfer direction
    pub fn tax_for(&self, direction: TransferDirection) -> u64 {
        match direction {
            TransferDirection::Buy => self.max_buy_fee,
            TransferDirection::Sell => self.max_sell_fee,
            TransferDirection::Generic => self.transfer_fee,
        }
    }

    /// Split a gross amount into net plus tax buckets for one direction
    pub fn breakdown(&self, gross: u128, direction: TransferDirection) -> FeeBreakdown {
        let tax = self.tax_for(direction);

        let dao = FixedPointPercent::compose(self.dao_fee, tax).apply(gross);
        let marketing = FixedPointPercent::compose(self.marketing_fee, tax).apply(gross);
        let liquidity = FixedPointPercent::compose(self.liquidity_fee, tax).apply(gross);
        let reflection = FixedPointPercent::compose(self.reflection_fee, tax).apply(gross);
        let burn = FixedPointPercent::compose(self.burn_fee, tax).apply(gross);

        let net = gross - (dao + marketing + liquidity + reflection + burn);

        FeeBreakdown {
            net,
            dao,
            marketing,
            liquidity,
            reflection,
            burn,
        }
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        use crate::constants::*;

        FeeSchedule {
            dao_fee: DEFAULT_DAO_FEE,
            marketing_fee: DEFAULT_MARKETING_FEE,
            liquidity_fee: DEFAULT_LIQUIDITY_FEE,
            reflection_fee: DEFAULT_REFLECTION_FEE,
            burn_fee: DEFAULT_BURN_FEE,
            transfer_fee: DEFAULT_TRANSFER_FEE,
            max_buy_fee: DEFAULT_MAX_BUY_FEE,
            max_sell_fee: DEFAULT_MAX_SELL_FEE,
        }
    }
}
