use proptest::prelude::*;
use std::sync::Arc;

use cinder_ledger::{TokenLedger, TransferReceipt};
use cinder_nullables::AllowAllPolicy;
use cinder_types::{AccountAddress, FeeSchedule};

fn test_address(n: u8) -> AccountAddress {
    AccountAddress::new(format!("cndr_{:0>8}", n))
}

fn test_ledger(initial_supply: u128) -> TokenLedger {
    TokenLedger::new(
        initial_supply,
        test_address(0),
        test_address(1),
        test_address(2),
        FeeSchedule::cinder_defaults(),
        Arc::new(AllowAllPolicy),
    )
    .unwrap()
}

proptest! {
    /// The fee components always reconstruct the gross amount exactly.
    #[test]
    fn split_components_sum_to_gross(amount in 0u128..u128::MAX / 10_000) {
        let r = TransferReceipt::split(&FeeSchedule::cinder_defaults(), amount).unwrap();
        prop_assert_eq!(r.net + r.reward_share + r.liquidity_share + r.burn_share, amount);
    }

    /// Conservation holds for any valid schedule, not just the defaults.
    #[test]
    fn split_conserves_for_arbitrary_schedules(
        amount in 0u128..u128::MAX / 10_000,
        fee_bps in 0u32..=10_000,
        reward_frac in 0u32..=100,
        liquidity_frac in 0u32..=100,
    ) {
        // Derive shares that never exceed the fee rate.
        let reward_bps = fee_bps * reward_frac / 200;
        let liquidity_bps = fee_bps * liquidity_frac / 200;
        let fees = FeeSchedule {
            transfer_fee_bps: fee_bps,
            reward_share_bps: reward_bps,
            liquidity_share_bps: liquidity_bps,
        };
        prop_assert!(fees.validate().is_ok());

        let r = TransferReceipt::split(&fees, amount).unwrap();
        prop_assert_eq!(r.net + r.reward_share + r.liquidity_share + r.burn_share, amount);
        prop_assert!(r.net <= amount);
    }

    /// The net amount never decreases as the gross grows.
    #[test]
    fn net_is_monotone_in_gross(
        amount in 0u128..1_000_000_000_000,
        bump in 1u128..1_000_000,
    ) {
        let fees = FeeSchedule::cinder_defaults();
        let a = TransferReceipt::split(&fees, amount).unwrap();
        let b = TransferReceipt::split(&fees, amount + bump).unwrap();
        prop_assert!(b.net >= a.net);
    }

    /// Sum of balances plus burned tokens equals the initial supply after
    /// any sequence of transfers between a handful of accounts.
    #[test]
    fn ledger_conservation_under_random_transfers(
        initial in 1_000u128..u128::MAX / 100_000,
        ops in prop::collection::vec((0u8..6, 0u8..6, 0u128..1_000_000_000), 0..40),
        whitelisted in 0u8..6,
    ) {
        let mut ledger = test_ledger(initial);
        let admin = test_address(0);
        ledger.add_to_whitelist(&admin, &[test_address(whitelisted)]).unwrap();

        for (from, to, amount) in ops {
            // Failures are fine; they must simply leave state coherent.
            let _ = ledger.transfer(&test_address(from), &test_address(to), amount);
            prop_assert!(ledger.check_conservation());
        }
    }

    /// A transfer touching a whitelisted endpoint moves the full amount.
    #[test]
    fn whitelisted_endpoint_is_fee_free(
        amount in 0u128..1_000_000_000,
        sender_side in any::<bool>(),
    ) {
        let mut ledger = test_ledger(1_000_000_000);
        let admin = test_address(0);
        let recipient = test_address(5);
        let exempt = if sender_side { admin.clone() } else { recipient.clone() };
        ledger.add_to_whitelist(&admin, &[exempt]).unwrap();

        let before_supply = ledger.total_supply();
        let r = ledger.transfer(&admin, &recipient, amount).unwrap();

        prop_assert_eq!(r.net, amount);
        prop_assert_eq!(r.total_fee(), 0);
        prop_assert_eq!(ledger.total_supply(), before_supply);
    }
}
