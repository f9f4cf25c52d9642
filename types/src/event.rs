//! Observable events emitted by the engines.
//!
//! Each successful operation emits exactly one event; failed operations emit
//! nothing. Wire format for external consumers is environment-specific and
//! out of scope — subscribers receive these in-process.

use crate::{AccountAddress, Timestamp};

/// Events that observers can subscribe to on each engine's event bus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenEvent {
    /// A transfer committed. `net` is what the recipient actually received
    /// after the fee split; `gross` is what the sender was debited.
    TransferCompleted {
        from: AccountAddress,
        to: AccountAddress,
        gross: u128,
        net: u128,
    },
    /// A vesting schedule was created.
    ScheduleCreated {
        beneficiary: AccountAddress,
        start: Timestamp,
        duration_secs: u64,
        total: u128,
    },
    /// Vested tokens were released. `gross` is the amount debited from the
    /// schedule; `net` is what the beneficiary received after fees.
    ReleaseCompleted {
        beneficiary: AccountAddress,
        gross: u128,
        net: u128,
    },
    /// A stake position was opened.
    Staked { staker: AccountAddress, amount: u128 },
    /// A stake position was closed and paid out.
    Unstaked {
        staker: AccountAddress,
        principal: u128,
        payout: u128,
        penalty: u128,
    },
}
