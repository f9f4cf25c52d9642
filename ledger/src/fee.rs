//! Fee-split arithmetic.
//!
//! All splits are exact integer math with floor rounding. The burn share
//! absorbs every truncation remainder, so the components always reconstruct
//! the gross amount: `net + reward + liquidity + burn == gross`.

use crate::LedgerError;
use cinder_types::{FeeSchedule, BPS_DENOMINATOR};
use serde::{Deserialize, Serialize};

/// The outcome of a single transfer, component by component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// Amount debited from the sender.
    pub gross: u128,
    /// Amount credited to the recipient.
    pub net: u128,
    /// Amount credited to the reward wallet.
    pub reward_share: u128,
    /// Amount credited to the liquidity wallet.
    pub liquidity_share: u128,
    /// Amount removed from total supply.
    pub burn_share: u128,
}

impl TransferReceipt {
    /// A fee-free receipt: the full amount reaches the recipient.
    pub fn exempt(amount: u128) -> Self {
        Self {
            gross: amount,
            net: amount,
            reward_share: 0,
            liquidity_share: 0,
            burn_share: 0,
        }
    }

    /// Split `amount` per the fee schedule.
    ///
    /// `net` keeps `floor(amount * (10_000 - fee_bps) / 10_000)`; the reward
    /// and liquidity wallets take their floored shares of the gross; the
    /// burn takes the rest of the fee. For small amounts the floored shares
    /// collapse to zero and the whole fee burns: intended truncation
    /// behavior, not a defect.
    pub fn split(fees: &FeeSchedule, amount: u128) -> Result<Self, LedgerError> {
        let keep_bps = BPS_DENOMINATOR
            .checked_sub(fees.transfer_fee_bps as u128)
            .ok_or(LedgerError::Overflow)?;
        let net = amount
            .checked_mul(keep_bps)
            .ok_or(LedgerError::Overflow)?
            / BPS_DENOMINATOR;
        let fee = amount - net;

        let reward_share = amount
            .checked_mul(fees.reward_share_bps as u128)
            .ok_or(LedgerError::Overflow)?
            / BPS_DENOMINATOR;
        let liquidity_share = amount
            .checked_mul(fees.liquidity_share_bps as u128)
            .ok_or(LedgerError::Overflow)?
            / BPS_DENOMINATOR;

        // Holds whenever the schedule validated (shares <= fee rate).
        let burn_share = fee
            .checked_sub(reward_share)
            .and_then(|rest| rest.checked_sub(liquidity_share))
            .ok_or(LedgerError::Overflow)?;

        Ok(Self {
            gross: amount,
            net,
            reward_share,
            liquidity_share,
            burn_share,
        })
    }

    /// The total fee deducted from the gross amount.
    pub fn total_fee(&self) -> u128 {
        self.gross - self.net
    }
}
