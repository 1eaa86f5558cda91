//! Reflection share ledger
//!
//! Accounts hold shares in a global pool instead of token balances. The
//! displayed balance is `shares / rate` where `rate` is the shares-per-token
//! conversion factor `total_shares / tokens_in_circulation`. Collecting
//! reflection tax retires the funding account's shares from the pool, which
//! shrinks the divisor and raises every remaining holder's derived balance
//! in one step, with no per-holder loop. Burning retires shares and shrinks
//! circulation together, leaving the rate unchanged so destroyed supply is
//! excluded from future reflection gains.

use crate::address::Address;
use crate::error::{LedgerError, Result};
use crate::supply::SupplyStats;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReflectionLedger {
    shares: HashMap<Address, u128>,
    total_shares: u128,
    tokens_in_circulation: u128,
    initial_supply: u128,
    total_burned: u128,
    total_reflected: u128,
}

impl ReflectionLedger {
    /// Create an empty, uninitialized ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the share pool and credit the full supply to `owner`.
    ///
    /// The share total is the largest multiple of the supply representable
    /// in u128, so the rate divides evenly at genesis and single balance
    /// units stay representable through repeated divisor shrinkage.
    pub fn initialize(&mut self, owner: Address, total_supply: u128) -> Result<()> {
        if self.is_initialized() {
            return Err(LedgerError::AlreadyInitialized);
        }
        if total_supply == 0 {
            return Err(LedgerError::ZeroSupply);
        }

        let total_shares = u128::MAX - (u128::MAX % total_supply);

        self.shares.insert(owner, total_shares);
        self.total_shares = total_shares;
        self.tokens_in_circulation = total_supply;
        self.initial_supply = total_supply;

        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.total_shares != 0
    }

    /// Shares-per-token conversion factor
    pub fn rate(&self) -> u128 {
        if self.tokens_in_circulation == 0 {
            return 0;
        }
        self.total_shares / self.tokens_in_circulation
    }

    /// Tokens currently in circulation (the reported total supply)
    pub fn tokens_in_circulation(&self) -> u128 {
        self.tokens_in_circulation
    }

    /// Derived token balance: `shares / rate`, truncating.
    ///
    /// Truncation here is the only rounding in the ledger; it is why the sum
    /// of all balances can trail `tokens_in_circulation` by a bounded dust
    /// amount (at most one unit per account).
    pub fn balance_of(&self, account: Address) -> u128 {
        let rate = self.rate();
        if rate == 0 {
            return 0;
        }
        self.shares.get(&account).copied().unwrap_or(0) / rate
    }

    /// Move `token_amount` from one account to another at the current rate.
    ///
    /// The conversion to shares is exact; no rounding happens at this step.
    /// The recipient entry is created on first credit, and a drained sender
    /// entry is kept rather than removed.
    pub fn transfer_shares(&mut self, from: Address, to: Address, token_amount: u128) -> Result<()> {
        let rate = self.ensure_initialized()?;

        let share_amount = token_amount.checked_mul(rate).ok_or(LedgerError::Overflow)?;
        self.debit(from, share_amount, token_amount, rate)?;
        *self.shares.entry(to).or_insert(0) += share_amount;

        Ok(())
    }

    /// Collect reflection tax: retire `token_amount` worth of shares from
    /// `from` and from the pool total.
    ///
    /// Circulation is untouched, so the shares-per-token divisor falls and
    /// every remaining share is worth proportionally more. The funding
    /// account's leftover stake gains along with everyone else's.
    pub fn reflect(&mut self, from: Address, token_amount: u128) -> Result<()> {
        let rate = self.ensure_initialized()?;

        if token_amount >= self.tokens_in_circulation {
            return Err(LedgerError::Underflow {
                requested: token_amount,
                circulating: self.tokens_in_circulation,
            });
        }

        let share_amount = token_amount.checked_mul(rate).ok_or(LedgerError::Overflow)?;
        self.debit(from, share_amount, token_amount, rate)?;
        self.total_shares -= share_amount;
        self.total_reflected += token_amount;

        Ok(())
    }

    /// Destroy `token_amount` of supply held by `from`.
    ///
    /// Shares and circulation shrink together, so the rate is unchanged (up
    /// to truncation): burned value rewards nobody and is excluded from
    /// future reflection gains.
    pub fn burn(&mut self, from: Address, token_amount: u128) -> Result<()> {
        let rate = self.ensure_initialized()?;

        if token_amount >= self.tokens_in_circulation {
            return Err(LedgerError::Underflow {
                requested: token_amount,
                circulating: self.tokens_in_circulation,
            });
        }

        let share_amount = token_amount.checked_mul(rate).ok_or(LedgerError::Overflow)?;
        self.debit(from, share_amount, token_amount, rate)?;
        self.total_shares -= share_amount;
        self.tokens_in_circulation -= token_amount;
        self.total_burned += token_amount;

        Ok(())
    }

    /// Accounts known to the ledger, including drained ones
    pub fn holders(&self) -> impl Iterator<Item = &Address> {
        self.shares.keys()
    }

    pub fn supply_stats(&self) -> SupplyStats {
        SupplyStats {
            initial_supply: self.initial_supply,
            tokens_in_circulation: self.tokens_in_circulation,
            total_burned: self.total_burned,
            total_reflected: self.total_reflected,
        }
    }

    fn ensure_initialized(&self) -> Result<u128> {
        let rate = self.rate();
        if rate == 0 {
            return Err(LedgerError::NotInitialized);
        }
        Ok(rate)
    }

    fn debit(
        &mut self,
        from: Address,
        share_amount: u128,
        token_amount: u128,
        rate: u128,
    ) -> Result<()> {
        let held = self.shares.get(&from).copied().unwrap_or(0);
        if held < share_amount {
            return Err(LedgerError::InsufficientBalance {
                requested: token_amount,
                available: held / rate,
            });
        }
        self.shares.insert(from, held - share_amount);
        Ok(())
    }
}
