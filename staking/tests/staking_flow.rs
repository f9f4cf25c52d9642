//! End-to-end staking flows against a whitelisted pool: the penalized and
//! penalty-free paths observed from the outside through ledger balances.

use std::sync::Arc;

use cinder_ledger::TokenLedger;
use cinder_nullables::{FixedOwnerPolicy, NullClock};
use cinder_staking::StakingPool;
use cinder_types::{AccountAddress, Clock, FeeSchedule, StakingParams};

const INITIAL_SUPPLY: u128 = 5_000_000_000;
const BASE_TIME: u64 = 1_622_551_248;

fn owner() -> AccountAddress {
    AccountAddress::new("cndr_owner")
}

fn reward_wallet() -> AccountAddress {
    AccountAddress::new("cndr_rewards")
}

fn fee_wallet() -> AccountAddress {
    AccountAddress::new("cndr_pool_fees")
}

fn pool_account() -> AccountAddress {
    AccountAddress::new("cndr_staking_pool")
}

fn setup() -> (TokenLedger, StakingPool, Arc<NullClock>) {
    let policy = Arc::new(FixedOwnerPolicy::new(owner()));
    let mut ledger = TokenLedger::new(
        INITIAL_SUPPLY,
        owner(),
        reward_wallet(),
        fee_wallet(),
        FeeSchedule::cinder_defaults(),
        policy.clone(),
    )
    .unwrap();
    ledger.add_to_whitelist(&owner(), &[pool_account()]).unwrap();

    let clock = Arc::new(NullClock::new(BASE_TIME));
    let pool = StakingPool::new(
        pool_account(),
        fee_wallet(),
        StakingParams {
            penalty_window_days: 10,
            penalty_rate_bps: 1_200,
        },
        policy,
        Arc::clone(&clock) as Arc<dyn Clock>,
    )
    .unwrap();
    (ledger, pool, clock)
}

#[test]
fn early_unstake_forfeits_twelve_percent() {
    let (mut ledger, mut pool, clock) = setup();
    assert_eq!(pool.penalty_window_days(), 10);

    pool.stake(&mut ledger, &owner(), 1_000_000_000).unwrap();
    assert_eq!(ledger.balance_of(&owner()), 4_000_000_000);
    assert_eq!(pool.total_shares(), 1_000_000_000);

    // Two and a half days in, well inside the ten-day window.
    clock.set(BASE_TIME + 432_000 / 2);
    let receipt = pool.unstake(&mut ledger, &owner()).unwrap();

    assert_eq!(receipt.payout, 880_000_000);
    assert_eq!(receipt.penalty, 120_000_000);
    assert_eq!(ledger.balance_of(&owner()), 4_880_000_000);
    assert_eq!(ledger.balance_of(&fee_wallet()), 120_000_000);
    assert_eq!(pool.total_shares(), 0);
    assert!(ledger.check_conservation());
}

#[test]
fn late_unstake_returns_the_full_principal() {
    let (mut ledger, mut pool, clock) = setup();

    pool.stake(&mut ledger, &owner(), 1_000_000_000).unwrap();
    assert_eq!(ledger.balance_of(&owner()), 4_000_000_000);

    // Twelve months in, far past the window; no reward accrues.
    clock.set(BASE_TIME + 63_120_000 / 2);
    let receipt = pool.unstake(&mut ledger, &owner()).unwrap();

    assert_eq!(receipt.payout, 1_000_000_000);
    assert_eq!(receipt.penalty, 0);
    assert_eq!(ledger.balance_of(&owner()), INITIAL_SUPPLY);
    assert_eq!(ledger.balance_of(&fee_wallet()), 0);
    assert_eq!(pool.total_shares(), 0);
    assert!(ledger.check_conservation());
}

#[test]
fn whitelisted_staker_sees_identical_flows() {
    let (mut ledger, mut pool, clock) = setup();
    ledger.add_to_whitelist(&owner(), &[owner()]).unwrap();
    assert!(ledger.is_whitelisted(&owner()));

    pool.stake(&mut ledger, &owner(), 1_000_000_000).unwrap();
    assert_eq!(ledger.balance_of(&owner()), 4_000_000_000);
    assert_eq!(pool.total_shares(), 1_000_000_000);

    clock.set(BASE_TIME + 63_120_000 / 2);
    pool.unstake(&mut ledger, &owner()).unwrap();

    assert_eq!(ledger.balance_of(&owner()), INITIAL_SUPPLY);
    assert_eq!(pool.total_shares(), 0);
}

#[test]
fn positions_are_independent_between_stakers() {
    let (mut ledger, mut pool, clock) = setup();
    let other = AccountAddress::new("cndr_second_staker");
    // Fund the second staker fee-free to keep the arithmetic round.
    ledger.add_to_whitelist(&owner(), &[owner()]).unwrap();
    ledger.transfer(&owner(), &other, 500_000_000).unwrap();
    ledger.remove_from_whitelist(&owner(), &[owner()]).unwrap();

    pool.stake(&mut ledger, &owner(), 1_000_000_000).unwrap();
    clock.advance(86_400);
    pool.stake(&mut ledger, &other, 500_000_000).unwrap();
    assert_eq!(pool.total_shares(), 1_500_000_000);

    // The first staker clears the window; the second does not.
    clock.advance(10 * 86_400 - 1);
    let first = pool.unstake(&mut ledger, &owner()).unwrap();
    let second = pool.unstake(&mut ledger, &other).unwrap();

    assert_eq!(first.penalty, 0);
    assert_eq!(second.penalty, 60_000_000);
    assert_eq!(pool.total_shares(), 0);
    assert!(ledger.check_conservation());
}
