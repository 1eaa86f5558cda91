//! Token configuration
//!
//! Deploy-time parameters for the token, loadable from a TOML file.

use crate::error::{Result, TokenError};
use ash_core::Address;
use ash_economics::constants;
use ash_economics::FeeSchedule;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Token parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,

    /// Total supply in whole tokens; base units are derived via `decimals`
    pub total_supply_whole: u64,

    /// Bucket shares of the transfer tax, parts-per-1000
    pub dao_fee: u64,
    pub marketing_fee: u64,
    pub liquidity_fee: u64,
    pub reflection_fee: u64,
    pub burn_fee: u64,

    /// Directional tax rates, parts-per-1000
    pub transfer_fee: u64,
    pub max_buy_fee: u64,
    pub max_sell_fee: u64,

    /// Hex addresses of the fee-collection accounts
    pub dao_address: String,
    pub marketing_address: String,

    /// Liquidity-pool counterparty, if one is designated at deploy time
    pub liquidity_pair: Option<String>,
}

impl TokenConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: TokenConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| TokenError::InvalidConfig(e.to_string()))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// The stock Ash token parameters
    pub fn ash() -> Self {
        TokenConfig {
            name: "Ash Token".to_string(),
            symbol: "ASH".to_string(),
            decimals: 18,
            total_supply_whole: 100_000,
            dao_fee: constants::DEFAULT_DAO_FEE,
            marketing_fee: constants::DEFAULT_MARKETING_FEE,
            liquidity_fee: constants::DEFAULT_LIQUIDITY_FEE,
            reflection_fee: constants::DEFAULT_REFLECTION_FEE,
            burn_fee: constants::DEFAULT_BURN_FEE,
            transfer_fee: constants::DEFAULT_TRANSFER_FEE,
            max_buy_fee: constants::DEFAULT_MAX_BUY_FEE,
            max_sell_fee: constants::DEFAULT_MAX_SELL_FEE,
            dao_address: "0xf3950787C0B81D3bF6C5A4f0c155A69A46fD924b".to_string(),
            marketing_address: "0xc056928cD87627E8B6eec4a613c0d1418E6e743D".to_string(),
            liquidity_pair: None,
        }
    }

    /// Total supply in base units
    pub fn total_supply(&self) -> Result<u128> {
        let scale = 10u128
            .checked_pow(self.decimals as u32)
            .ok_or_else(|| TokenError::InvalidConfig(format!("decimals {} too large", self.decimals)))?;

        (self.total_supply_whole as u128)
            .checked_mul(scale)
            .ok_or_else(|| {
                TokenError::InvalidConfig(format!(
                    "supply {} overflows at {} decimals",
                    self.total_supply_whole, self.decimals
                ))
            })
    }

    /// Validated fee schedule built from the configured rates
    pub fn fee_schedule(&self) -> Result<FeeSchedule> {
        Ok(FeeSchedule::new(
            self.dao_fee,
            self.marketing_fee,
            self.liquidity_fee,
            self.reflection_fee,
            self.burn_fee,
            self.transfer_fee,
            self.max_buy_fee,
            self.max_sell_fee,
        )?)
    }

    pub fn dao_address(&self) -> Result<Address> {
        Ok(Address::from_hex(&self.dao_address)?)
    }

    pub fn marketing_address(&self) -> Result<Address> {
        Ok(Address::from_hex(&self.marketing_address)?)
    }

    pub fn liquidity_pair(&self) -> Result<Option<Address>> {
        match &self.liquidity_pair {
            Some(s) => Ok(Some(Address::from_hex(s)?)),
            None => Ok(None),
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::ash()
    }
}
