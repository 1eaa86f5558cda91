//! Ash token facade
//!
//! Token surface over the reflection ledger: metadata, allowances, tax-rate
//! getters, owner-gated administration and stuck-token recovery.

use crate::config::TokenConfig;
use crate::engine::{FeeDestinations, TransferEngine};
use crate::error::{Result, TokenError};
use ash_core::{Address, ReflectionLedger, SupplyStats};
use ash_economics::{FeeBreakdown, FeeSchedule};
use std::collections::HashMap;

/// Collaborator interface for sweeping tokens other than this ledger's own.
///
/// The ledger only knows how to sweep itself; any other token reached by a
/// stuck-token claim is driven through this seam.
pub trait ExternalToken {
    /// Balance the external token attributes to `holder`
    fn balance_of(&self, holder: Address) -> u128;

    /// Move `amount` from the ledger contract's account to `to`
    fn transfer(&mut self, to: Address, amount: u128) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct Token {
    name: String,
    symbol: String,
    decimals: u8,
    owner: Address,
    contract_address: Address,
    engine: TransferEngine,
    allowances: HashMap<(Address, Address), u128>,
}

impl Token {
    /// Deploy a token from its configuration.
    ///
    /// The full supply is credited to `owner`. The owner, the contract
    /// itself and both fee-collection accounts start out tax-exempt, and
    /// the contract's own address doubles as the liquidity accumulator.
    pub fn from_config(
        config: &TokenConfig,
        owner: Address,
        contract_address: Address,
    ) -> Result<Self> {
        let schedule = config.fee_schedule()?;
        let dao = config.dao_address()?;
        let marketing = config.marketing_address()?;
        let total_supply = config.total_supply()?;

        let mut ledger = ReflectionLedger::new();
        ledger.initialize(owner, total_supply)?;

        let destinations = FeeDestinations {
            dao,
            marketing,
            liquidity_accumulator: contract_address,
        };

        let mut engine = TransferEngine::new(ledger, schedule, destinations);
        engine.exemptions_mut().add(owner);
        engine.exemptions_mut().add(contract_address);
        engine.exemptions_mut().add(dao);
        engine.exemptions_mut().add(marketing);
        engine.set_liquidity_pair(config.liquidity_pair()?);

        log::info!(
            "deployed {} ({}) with supply {} to owner {}",
            config.name,
            config.symbol,
            total_supply,
            owner
        );

        Ok(Token {
            name: config.name.clone(),
            symbol: config.symbol.clone(),
            decimals: config.decimals,
            owner,
            contract_address,
            engine,
            allowances: HashMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn contract_address(&self) -> Address {
        self.contract_address
    }

    pub fn total_supply(&self) -> u128 {
        self.engine.ledger().tokens_in_circulation()
    }

    pub fn balance_of(&self, account: Address) -> u128 {
        self.engine.ledger().balance_of(account)
    }

    pub fn supply_stats(&self) -> SupplyStats {
        self.engine.ledger().supply_stats()
    }

    pub fn is_exempt(&self, account: Address) -> bool {
        self.engine.exemptions().is_exempt(account)
    }

    pub fn ledger(&self) -> &ReflectionLedger {
        self.engine.ledger()
    }

    // Tax-rate getters, all parts-per-1000.

    pub fn transfer_tax(&self) -> u64 {
        self.engine.schedule().transfer_fee()
    }

    pub fn dao_fund_tax(&self) -> u64 {
        self.engine.schedule().dao_fee()
    }

    pub fn marketing_tax(&self) -> u64 {
        self.engine.schedule().marketing_fee()
    }

    pub fn liquidity_tax(&self) -> u64 {
        self.engine.schedule().liquidity_fee()
    }

    pub fn reflections_tax(&self) -> u64 {
        self.engine.schedule().reflection_fee()
    }

    pub fn burning_tax(&self) -> u64 {
        self.engine.schedule().burn_fee()
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> u128 {
        self.allowances.get(&(owner, spender)).copied().unwrap_or(0)
    }

    /// Transfer from the caller's own balance
    pub fn transfer(&mut self, caller: Address, to: Address, amount: u128) -> Result<FeeBreakdown> {
        self.engine.transfer(caller, to, amount)
    }

    /// Set the caller's allowance for `spender`, replacing any prior value
    pub fn approve(&mut self, caller: Address, spender: Address, amount: u128) {
        self.allowances.insert((caller, spender), amount);
    }

    /// Delegated transfer against a previously approved allowance.
    ///
    /// The allowance is only consumed when the transfer itself succeeds.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<FeeBreakdown> {
        let key = (from, caller);
        let available = self.allowances.get(&key).copied().unwrap_or(0);
        if available < amount {
            return Err(TokenError::InsufficientAllowance {
                requested: amount,
                available,
            });
        }

        let split = self.engine.transfer(from, to, amount)?;
        self.allowances.insert(key, available - amount);
        Ok(split)
    }

    // Owner surface.

    fn ensure_owner(&self, caller: Address) -> Result<()> {
        if caller != self.owner {
            return Err(TokenError::Unauthorized(caller));
        }
        Ok(())
    }

    /// Replace the fee schedule. The replacement arrives pre-validated by
    /// construction, so the bucket decomposition invariant is re-checked at
    /// the type level.
    pub fn set_fees(&mut self, caller: Address, schedule: FeeSchedule) -> Result<()> {
        self.ensure_owner(caller)?;
        self.engine.set_schedule(schedule);
        log::info!("fee schedule updated by owner");
        Ok(())
    }

    pub fn add_exemption(&mut self, caller: Address, account: Address) -> Result<()> {
        self.ensure_owner(caller)?;
        self.engine.exemptions_mut().add(account);
        log::info!("exemption added for {}", account);
        Ok(())
    }

    pub fn remove_exemption(&mut self, caller: Address, account: Address) -> Result<()> {
        self.ensure_owner(caller)?;
        self.engine.exemptions_mut().remove(account);
        log::info!("exemption removed for {}", account);
        Ok(())
    }

    pub fn set_liquidity_pair(&mut self, caller: Address, pair: Option<Address>) -> Result<()> {
        self.ensure_owner(caller)?;
        self.engine.set_liquidity_pair(pair);
        log::info!("liquidity pair set to {:?}", pair.map(|p| p.to_string()));
        Ok(())
    }

    /// Sweep tokens erroneously held by the ledger's own contract address
    /// back to the owner. Returns the amount recovered.
    ///
    /// Only the ledger's own address is handled here; claims naming another
    /// token go through [`Token::claim_stuck_external`].
    pub fn claim_stuck_tokens(&mut self, caller: Address, token: Address) -> Result<u128> {
        self.ensure_owner(caller)?;

        if token != self.contract_address {
            return Err(TokenError::UnknownToken(token));
        }

        let amount = self.balance_of(self.contract_address);
        if amount > 0 {
            // The contract address is exempt, so the sweep is untaxed.
            self.engine.transfer(self.contract_address, self.owner, amount)?;
        }

        log::info!("swept {} stuck tokens to owner", amount);
        Ok(amount)
    }

    /// Sweep another token's balance held by this contract, through that
    /// token's own transfer interface. Returns the amount recovered.
    pub fn claim_stuck_external(
        &mut self,
        caller: Address,
        token: &mut dyn ExternalToken,
    ) -> Result<u128> {
        self.ensure_owner(caller)?;

        let amount = token.balance_of(self.contract_address);
        if amount > 0 {
            token.transfer(self.owner, amount)?;
        }

        Ok(amount)
    }
}
