//! Transfer orchestration
//!
//! Resolves exemptions and the transfer direction, splits the gross amount
//! through the fee schedule, routes every bucket to its destination and
//! commits the whole sequence as one atomic ledger transition.

use crate::error::Result;
use crate::exemptions::ExemptionRegistry;
use ash_core::{Address, LedgerError, ReflectionLedger};
use ash_economics::{FeeBreakdown, FeeSchedule, TransferDirection};
use serde::{Deserialize, Serialize};

/// Fixed destination accounts for the routed fee buckets
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeeDestinations {
    pub dao: Address,
    pub marketing: Address,
    /// Accumulates the liquidity cut until an external swap collects it
    pub liquidity_accumulator: Address,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferEngine {
    ledger: ReflectionLedger,
    schedule: FeeSchedule,
    exemptions: ExemptionRegistry,
    destinations: FeeDestinations,
    liquidity_pair: Option<Address>,
}

impl TransferEngine {
    pub fn new(
        ledger: ReflectionLedger,
        schedule: FeeSchedule,
        destinations: FeeDestinations,
    ) -> Self {
        TransferEngine {
            ledger,
            schedule,
            exemptions: ExemptionRegistry::new(),
            destinations,
            liquidity_pair: None,
        }
    }

    pub fn ledger(&self) -> &ReflectionLedger {
        &self.ledger
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Replace the fee schedule. Schedules only exist validated, so the
    /// decomposition invariant holds for the replacement too.
    pub fn set_schedule(&mut self, schedule: FeeSchedule) {
        self.schedule = schedule;
    }

    pub fn exemptions(&self) -> &ExemptionRegistry {
        &self.exemptions
    }

    pub fn exemptions_mut(&mut self) -> &mut ExemptionRegistry {
        &mut self.exemptions
    }

    pub fn destinations(&self) -> &FeeDestinations {
        &self.destinations
    }

    pub fn liquidity_pair(&self) -> Option<Address> {
        self.liquidity_pair
    }

    pub fn set_liquidity_pair(&mut self, pair: Option<Address>) {
        self.liquidity_pair = pair;
    }

    fn direction(&self, from: Address, to: Address) -> TransferDirection {
        match self.liquidity_pair {
            Some(pair) if from == pair => TransferDirection::Buy,
            Some(pair) if to == pair => TransferDirection::Sell,
            _ => TransferDirection::Generic,
        }
    }

    /// Execute a transfer as one atomic state transition.
    ///
    /// Exempt parties move the gross amount untaxed. Everyone else pays the
    /// directional tax, decomposed into buckets that are routed in a fixed
    /// order; burn and reflect move the share rate, so they come last.
    pub fn transfer(&mut self, from: Address, to: Address, gross: u128) -> Result<FeeBreakdown> {
        let available = self.ledger.balance_of(from);
        if available < gross {
            return Err(LedgerError::InsufficientBalance {
                requested: gross,
                available,
            }
            .into());
        }

        if self.exemptions.is_exempt(from) || self.exemptions.is_exempt(to) {
            self.ledger.transfer_shares(from, to, gross)?;
            log::debug!("exempt transfer {} -> {} amount {}", from, to, gross);
            return Ok(FeeBreakdown::untaxed(gross));
        }

        let direction = self.direction(from, to);
        let split = self.schedule.breakdown(gross, direction);

        // Stage the sequence on a copy and swap it in only when every step
        // succeeded, so a failure anywhere leaves the ledger untouched.
        let mut staged = self.ledger.clone();
        staged.transfer_shares(from, to, split.net)?;
        staged.transfer_shares(from, self.destinations.dao, split.dao)?;
        staged.transfer_shares(from, self.destinations.marketing, split.marketing)?;
        staged.transfer_shares(from, self.destinations.liquidity_accumulator, split.liquidity)?;
        staged.burn(from, split.burn)?;
        staged.reflect(from, split.reflection)?;
        self.ledger = staged;

        log::debug!(
            "taxed transfer {} -> {} gross {} net {} dao {} marketing {} liquidity {} reflection {} burn {}",
            from,
            to,
            gross,
            split.net,
            split.dao,
            split.marketing,
            split.liquidity,
            split.reflection,
            split.burn
        );

        Ok(split)
    }
}
