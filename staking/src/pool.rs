//! The staking pool engine.

use std::collections::HashMap;
use std::sync::Arc;

use crate::position::StakePosition;
use crate::StakingError;
use cinder_ledger::{LedgerError, TokenLedger};
use cinder_store::{MetaStore, PositionStore};
use cinder_types::{
    AccountAddress, AdminOp, AuthorizationPolicy, Clock, StakingParams, TokenEvent,
    BPS_DENOMINATOR,
};
use cinder_utils::EventBus;

const TOTAL_SHARES_META_KEY: &[u8] = b"staking_total_shares";

/// The payout breakdown of a closed position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnstakeReceipt {
    pub principal: u128,
    pub payout: u128,
    pub penalty: u128,
}

/// Locks balances for a duration and applies an early-withdrawal penalty.
///
/// Invariant: `total_shares` equals the sum of all open positions'
/// principals. The pool never mutates balances directly; deposits and
/// payouts go through [`TokenLedger::transfer`] and are therefore subject
/// to the fee split unless the pool or its counterparty is whitelisted.
pub struct StakingPool {
    /// The ledger account holding staked tokens.
    account: AccountAddress,
    /// Receives early-withdrawal penalties.
    fee_wallet: AccountAddress,
    params: StakingParams,
    positions: HashMap<AccountAddress, StakePosition>,
    total_shares: u128,
    policy: Arc<dyn AuthorizationPolicy>,
    clock: Arc<dyn Clock>,
    events: EventBus<TokenEvent>,
}

impl StakingPool {
    pub fn new(
        account: AccountAddress,
        fee_wallet: AccountAddress,
        params: StakingParams,
        policy: Arc<dyn AuthorizationPolicy>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StakingError> {
        params.validate()?;
        Ok(Self {
            account,
            fee_wallet,
            params,
            positions: HashMap::new(),
            total_shares: 0,
            policy,
            clock,
            events: EventBus::new(),
        })
    }

    /// The ledger account holding staked tokens.
    pub fn pool_account(&self) -> &AccountAddress {
        &self.account
    }

    /// Days after staking during which unstaking is penalized.
    pub fn penalty_window_days(&self) -> u64 {
        self.params.penalty_window_days
    }

    /// Where early-withdrawal penalties are routed.
    pub fn fee_wallet(&self) -> &AccountAddress {
        &self.fee_wallet
    }

    /// Redirect future penalties to a different wallet. Gated by the
    /// authorization policy.
    pub fn set_fee_wallet(
        &mut self,
        caller: &AccountAddress,
        wallet: AccountAddress,
    ) -> Result<(), StakingError> {
        if !self.policy.is_authorized(caller, AdminOp::ConfigurePool) {
            return Err(StakingError::Unauthorized);
        }
        tracing::info!(%wallet, "penalty wallet reconfigured");
        self.fee_wallet = wallet;
        Ok(())
    }

    /// Lock `amount` from the staker into the pool.
    ///
    /// One open position per staker; staking again while a position is open
    /// is rejected rather than merged, so the penalty clock on the existing
    /// principal cannot be silently reset.
    pub fn stake(
        &mut self,
        ledger: &mut TokenLedger,
        staker: &AccountAddress,
        amount: u128,
    ) -> Result<(), StakingError> {
        if amount == 0 {
            return Err(StakingError::InvalidAmount);
        }
        if self.positions.contains_key(staker) {
            return Err(StakingError::PositionExists);
        }
        let new_total = self
            .total_shares
            .checked_add(amount)
            .ok_or(StakingError::Overflow)?;

        ledger.transfer(staker, &self.account, amount)?;
        self.total_shares = new_total;
        let started_at = self.clock.now();
        self.positions.insert(
            staker.clone(),
            StakePosition {
                staker: staker.clone(),
                principal: amount,
                started_at,
            },
        );

        tracing::debug!(%staker, amount, %started_at, "position opened");
        self.events.emit(&TokenEvent::Staked {
            staker: staker.clone(),
            amount,
        });
        Ok(())
    }

    /// Close the staker's position and pay it out.
    ///
    /// Inside the penalty window the payout is principal minus the flat
    /// basis-point penalty, which is routed to the fee wallet; after the
    /// window the full principal returns, nothing more.
    pub fn unstake(
        &mut self,
        ledger: &mut TokenLedger,
        staker: &AccountAddress,
    ) -> Result<UnstakeReceipt, StakingError> {
        let position = self
            .positions
            .get(staker)
            .ok_or(StakingError::NoActivePosition)?;

        let principal = position.principal;
        let penalty = if position.window_elapsed(self.params.penalty_window_secs(), self.clock.now())
        {
            0
        } else {
            principal
                .checked_mul(self.params.penalty_rate_bps as u128)
                .ok_or(StakingError::Overflow)?
                / BPS_DENOMINATOR
        };
        let payout = principal - penalty;

        // Both transfers must commit; reject up front if the pool cannot
        // cover the whole principal (possible when deposits were fee-bitten
        // because the pool was not whitelisted).
        let available = ledger.balance_of(&self.account);
        if available < principal {
            return Err(StakingError::Ledger(LedgerError::InsufficientBalance {
                needed: principal,
                available,
            }));
        }

        self.positions.remove(staker);
        self.total_shares -= principal;
        ledger.transfer(&self.account, staker, payout)?;
        if penalty > 0 {
            ledger.transfer(&self.account, &self.fee_wallet, penalty)?;
        }

        tracing::debug!(%staker, principal, payout, penalty, "position closed");
        self.events.emit(&TokenEvent::Unstaked {
            staker: staker.clone(),
            principal,
            payout,
            penalty,
        });
        Ok(UnstakeReceipt {
            principal,
            payout,
            penalty,
        })
    }

    pub fn position_of(&self, staker: &AccountAddress) -> Option<&StakePosition> {
        self.positions.get(staker)
    }

    /// Sum of all open positions' principals.
    pub fn total_shares(&self) -> u128 {
        self.total_shares
    }

    /// Subscribe to events emitted by this pool.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(&TokenEvent) + Send + Sync>) {
        self.events.subscribe(listener);
    }
}

impl StakingPool {
    /// Persist every open position and the share counter.
    pub fn save_to_store(
        &self,
        store: &dyn PositionStore,
        meta: &dyn MetaStore,
    ) -> Result<(), StakingError> {
        for (staker, position) in &self.positions {
            let bytes = bincode::serialize(position)
                .map_err(|e| StakingError::Storage(e.to_string()))?;
            store
                .put_position(staker, &bytes)
                .map_err(|e| StakingError::Storage(e.to_string()))?;
        }
        meta.put_meta(TOTAL_SHARES_META_KEY, &self.total_shares.to_be_bytes())
            .map_err(|e| StakingError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Restore a pool previously written with [`Self::save_to_store`].
    pub fn load_from_store(
        store: &dyn PositionStore,
        meta: &dyn MetaStore,
        account: AccountAddress,
        fee_wallet: AccountAddress,
        params: StakingParams,
        policy: Arc<dyn AuthorizationPolicy>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StakingError> {
        params.validate()?;
        let mut positions = HashMap::new();
        for (staker, bytes) in store
            .iter_positions()
            .map_err(|e| StakingError::Storage(e.to_string()))?
        {
            let position: StakePosition = bincode::deserialize(&bytes)
                .map_err(|e| StakingError::Storage(e.to_string()))?;
            positions.insert(staker, position);
        }
        let total_shares = match meta
            .get_meta(TOTAL_SHARES_META_KEY)
            .map_err(|e| StakingError::Storage(e.to_string()))?
        {
            Some(bytes) => {
                let arr: [u8; 16] = bytes.as_slice().try_into().map_err(|_| {
                    StakingError::Storage("malformed total shares metadata".into())
                })?;
                u128::from_be_bytes(arr)
            }
            None => return Err(StakingError::Storage("missing total shares metadata".into())),
        };
        Ok(Self {
            account,
            fee_wallet,
            params,
            positions,
            total_shares,
            policy,
            clock,
            events: EventBus::new(),
        })
    }
}
