//! The vesting scheduler engine.

use std::collections::HashMap;
use std::sync::Arc;

use crate::schedule::VestingSchedule;
use crate::VestingError;
use cinder_ledger::{TokenLedger, TransferReceipt};
use cinder_store::ScheduleStore;
use cinder_types::{AccountAddress, AdminOp, AuthorizationPolicy, Clock, TokenEvent, Timestamp};
use cinder_utils::EventBus;

/// Manages vesting schedules backed by tokens held in the scheduler's own
/// ledger account.
///
/// The scheduler never mutates balances directly: releases move tokens
/// through [`TokenLedger::transfer`], so the beneficiary receives the
/// fee-adjusted net while the schedule is debited the gross amount.
pub struct VestingScheduler {
    /// The ledger account holding the tokens that back all schedules.
    account: AccountAddress,
    schedules: HashMap<AccountAddress, VestingSchedule>,
    policy: Arc<dyn AuthorizationPolicy>,
    clock: Arc<dyn Clock>,
    events: EventBus<TokenEvent>,
}

impl VestingScheduler {
    pub fn new(
        account: AccountAddress,
        policy: Arc<dyn AuthorizationPolicy>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            account,
            schedules: HashMap::new(),
            policy,
            clock,
            events: EventBus::new(),
        }
    }

    /// The ledger account that backs the schedules.
    pub fn scheduler_account(&self) -> &AccountAddress {
        &self.account
    }

    /// Commit part of the scheduler's uncommitted balance to a new schedule.
    ///
    /// One schedule per beneficiary; fully released schedules still occupy
    /// the slot. The commitment must be covered by the withdrawable balance
    /// (held balance minus everything already committed).
    pub fn create_schedule(
        &mut self,
        ledger: &TokenLedger,
        caller: &AccountAddress,
        beneficiary: &AccountAddress,
        start: Timestamp,
        duration_secs: u64,
        slice_secs: u64,
        amount: u128,
    ) -> Result<(), VestingError> {
        if !self.policy.is_authorized(caller, AdminOp::CreateSchedule) {
            return Err(VestingError::Unauthorized);
        }
        if duration_secs == 0 {
            return Err(VestingError::InvalidDuration);
        }
        if slice_secs < 1 {
            return Err(VestingError::InvalidSlice);
        }
        if amount == 0 {
            return Err(VestingError::InvalidAmount);
        }
        if self.schedules.contains_key(beneficiary) {
            return Err(VestingError::ScheduleExists);
        }
        let withdrawable = self.withdrawable_amount(ledger);
        if amount > withdrawable {
            return Err(VestingError::InsufficientReserve {
                requested: amount,
                withdrawable,
            });
        }

        self.schedules.insert(
            beneficiary.clone(),
            VestingSchedule {
                beneficiary: beneficiary.clone(),
                start,
                duration_secs,
                slice_secs,
                total: amount,
                released: 0,
            },
        );

        tracing::info!(%beneficiary, %start, duration_secs, total = amount, "vesting schedule created");
        self.events.emit(&TokenEvent::ScheduleCreated {
            beneficiary: beneficiary.clone(),
            start,
            duration_secs,
            total: amount,
        });
        Ok(())
    }

    /// The gross amount the beneficiary could release right now.
    pub fn compute_releasable(&self, beneficiary: &AccountAddress) -> Result<u128, VestingError> {
        let schedule = self
            .schedules
            .get(beneficiary)
            .ok_or(VestingError::UnknownBeneficiary)?;
        schedule
            .releasable_at(self.clock.now())
            .ok_or(VestingError::Overflow)
    }

    /// Release `amount` (gross) to the beneficiary through the ledger.
    ///
    /// Callable by the beneficiary or an authorized administrator. The
    /// schedule records the gross debit; the transfer delivers the
    /// fee-adjusted net.
    pub fn release(
        &mut self,
        ledger: &mut TokenLedger,
        caller: &AccountAddress,
        beneficiary: &AccountAddress,
        amount: u128,
    ) -> Result<TransferReceipt, VestingError> {
        if caller != beneficiary && !self.policy.is_authorized(caller, AdminOp::ReleaseVested) {
            return Err(VestingError::Unauthorized);
        }
        if amount == 0 {
            return Err(VestingError::InvalidAmount);
        }
        let releasable = self.compute_releasable(beneficiary)?;
        if amount > releasable {
            return Err(VestingError::ExceedsReleasable {
                requested: amount,
                releasable,
            });
        }

        // The reserve invariant guarantees the scheduler account covers the
        // gross amount, so the transfer commits; it runs before the schedule
        // mutation to keep failures effect-free.
        let receipt = ledger.transfer(&self.account, beneficiary, amount)?;
        let schedule = self
            .schedules
            .get_mut(beneficiary)
            .ok_or(VestingError::UnknownBeneficiary)?;
        schedule.released += amount;

        tracing::debug!(
            %beneficiary,
            gross = amount,
            net = receipt.net,
            remaining = schedule.outstanding(),
            "vested tokens released"
        );
        self.events.emit(&TokenEvent::ReleaseCompleted {
            beneficiary: beneficiary.clone(),
            gross: amount,
            net: receipt.net,
        });
        Ok(receipt)
    }

    pub fn get_schedule(&self, beneficiary: &AccountAddress) -> Option<&VestingSchedule> {
        self.schedules.get(beneficiary)
    }

    /// The gross amount still committed across all schedules.
    pub fn total_committed(&self) -> u128 {
        self.schedules.values().map(|s| s.outstanding()).sum()
    }

    /// The scheduler balance not yet committed to any schedule.
    pub fn withdrawable_amount(&self, ledger: &TokenLedger) -> u128 {
        ledger
            .balance_of(&self.account)
            .saturating_sub(self.total_committed())
    }

    /// Subscribe to events emitted by this scheduler.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(&TokenEvent) + Send + Sync>) {
        self.events.subscribe(listener);
    }
}

impl VestingScheduler {
    /// Persist every schedule.
    pub fn save_to_store(&self, store: &dyn ScheduleStore) -> Result<(), VestingError> {
        for (beneficiary, schedule) in &self.schedules {
            let bytes = bincode::serialize(schedule)
                .map_err(|e| VestingError::Storage(e.to_string()))?;
            store
                .put_schedule(beneficiary, &bytes)
                .map_err(|e| VestingError::Storage(e.to_string()))?;
        }
        Ok(())
    }

    /// Restore a scheduler previously written with [`Self::save_to_store`].
    pub fn load_from_store(
        store: &dyn ScheduleStore,
        account: AccountAddress,
        policy: Arc<dyn AuthorizationPolicy>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, VestingError> {
        let mut schedules = HashMap::new();
        for (beneficiary, bytes) in store
            .iter_schedules()
            .map_err(|e| VestingError::Storage(e.to_string()))?
        {
            let schedule: VestingSchedule = bincode::deserialize(&bytes)
                .map_err(|e| VestingError::Storage(e.to_string()))?;
            schedules.insert(beneficiary, schedule);
        }
        Ok(Self {
            account,
            schedules,
            policy,
            clock,
            events: EventBus::new(),
        })
    }
}
