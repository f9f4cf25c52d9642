//! Protocol parameters — fee schedule and staking configuration.
//!
//! All rates are basis points over a 10_000 denominator; all arithmetic that
//! consumes them is exact integer math with floor rounding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Basis-point denominator shared by every rate in the protocol.
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Errors produced when validating parameter sets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("fee shares exceed the total fee: reward {reward_bps} + liquidity {liquidity_bps} > fee {fee_bps}")]
    SharesExceedFee {
        fee_bps: u32,
        reward_bps: u32,
        liquidity_bps: u32,
    },
    #[error("rate {0} exceeds the basis-point denominator")]
    RateOutOfRange(u32),
}

/// The transfer fee split.
///
/// A non-exempt transfer of `amount` delivers
/// `floor(amount * (10_000 - transfer_fee_bps) / 10_000)` to the recipient;
/// the reward and liquidity wallets each take their floored share of the
/// gross, and whatever truncation leaves over is burned.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Total fee taken from every non-exempt transfer (basis points).
    pub transfer_fee_bps: u32,
    /// Share of the gross routed to the reward wallet (basis points).
    pub reward_share_bps: u32,
    /// Share of the gross routed to the liquidity wallet (basis points).
    pub liquidity_share_bps: u32,
}

impl FeeSchedule {
    /// The launch configuration: 1% fee, split 0.50% rewards / 0.25%
    /// liquidity, remainder (including all rounding) burned.
    pub fn cinder_defaults() -> Self {
        Self {
            transfer_fee_bps: 100,
            reward_share_bps: 50,
            liquidity_share_bps: 25,
        }
    }

    /// Validate internal consistency of the schedule.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.transfer_fee_bps as u128 > BPS_DENOMINATOR {
            return Err(ParamsError::RateOutOfRange(self.transfer_fee_bps));
        }
        if self.reward_share_bps + self.liquidity_share_bps > self.transfer_fee_bps {
            return Err(ParamsError::SharesExceedFee {
                fee_bps: self.transfer_fee_bps,
                reward_bps: self.reward_share_bps,
                liquidity_bps: self.liquidity_share_bps,
            });
        }
        Ok(())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::cinder_defaults()
    }
}

/// Staking pool configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StakingParams {
    /// Days after staking during which unstaking is penalized.
    pub penalty_window_days: u64,
    /// Penalty charged against principal inside the window (basis points).
    pub penalty_rate_bps: u32,
}

impl StakingParams {
    /// The penalty window expressed in seconds.
    pub fn penalty_window_secs(&self) -> u64 {
        self.penalty_window_days.saturating_mul(86_400)
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.penalty_rate_bps as u128 > BPS_DENOMINATOR {
            return Err(ParamsError::RateOutOfRange(self.penalty_rate_bps));
        }
        Ok(())
    }
}
