use proptest::prelude::*;
use std::sync::Arc;

use cinder_ledger::TokenLedger;
use cinder_nullables::{AllowAllPolicy, NullClock};
use cinder_staking::StakingPool;
use cinder_types::{AccountAddress, Clock, FeeSchedule, StakingParams};

fn test_address(n: u8) -> AccountAddress {
    AccountAddress::new(format!("cndr_{:0>8}", n))
}

fn setup(params: StakingParams, supply: u128) -> (TokenLedger, StakingPool, Arc<NullClock>) {
    let mut ledger = TokenLedger::new(
        supply,
        test_address(0),
        test_address(1),
        test_address(2),
        FeeSchedule::cinder_defaults(),
        Arc::new(AllowAllPolicy),
    )
    .unwrap();
    let pool_account = test_address(10);
    ledger
        .add_to_whitelist(&test_address(0), &[pool_account.clone()])
        .unwrap();
    let clock = Arc::new(NullClock::new(0));
    let pool = StakingPool::new(
        pool_account,
        test_address(3),
        params,
        Arc::new(AllowAllPolicy),
        Arc::clone(&clock) as Arc<dyn Clock>,
    )
    .unwrap();
    (ledger, pool, clock)
}

proptest! {
    /// Payout plus penalty always reconstructs the principal, and the
    /// penalty matches the configured rate exactly inside the window and
    /// vanishes at or after it.
    #[test]
    fn payout_and_penalty_reconstruct_principal(
        amount in 1u128..1_000_000_000_000,
        window_days in 1u64..365,
        rate_bps in 0u32..=10_000,
        elapsed in 0u64..40_000_000,
    ) {
        let params = StakingParams {
            penalty_window_days: window_days,
            penalty_rate_bps: rate_bps,
        };
        let (mut ledger, mut pool, clock) = setup(params, amount * 2);
        let staker = test_address(0);

        pool.stake(&mut ledger, &staker, amount).unwrap();
        clock.advance(elapsed);
        let receipt = pool.unstake(&mut ledger, &staker).unwrap();

        prop_assert_eq!(receipt.payout + receipt.penalty, amount);
        if elapsed >= params.penalty_window_secs() {
            prop_assert_eq!(receipt.penalty, 0);
        } else {
            prop_assert_eq!(receipt.penalty, amount * rate_bps as u128 / 10_000);
        }
        prop_assert_eq!(pool.total_shares(), 0);
        prop_assert!(ledger.check_conservation());
    }

    /// The share counter always equals the sum of open principals across an
    /// arbitrary interleaving of stakes and unstakes.
    #[test]
    fn shares_track_open_principals(
        ops in prop::collection::vec((0u8..5, 1u128..1_000_000, any::<bool>()), 1..30),
    ) {
        let params = StakingParams {
            penalty_window_days: 10,
            penalty_rate_bps: 1_200,
        };
        let (mut ledger, mut pool, clock) = setup(params, u128::MAX / 1_000);
        let funder = test_address(0);
        for n in 1..5u8 {
            ledger.transfer(&funder, &test_address(n), 100_000_000).unwrap();
        }

        for (who, amount, unstake) in ops {
            let account = test_address(who);
            if unstake {
                let _ = pool.unstake(&mut ledger, &account);
            } else {
                let _ = pool.stake(&mut ledger, &account, amount);
            }
            clock.advance(3_600);

            let open: u128 = (0..5u8)
                .filter_map(|n| pool.position_of(&test_address(n)))
                .map(|p| p.principal)
                .sum();
            prop_assert_eq!(pool.total_shares(), open);
            prop_assert!(ledger.check_conservation());
        }
    }
}
