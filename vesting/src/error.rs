//! Vesting error type.

use cinder_ledger::LedgerError;
use thiserror::Error;

/// Errors produced by the vesting scheduler.
///
/// Every error leaves schedules and ledger balances untouched.
#[derive(Debug, Error)]
pub enum VestingError {
    #[error("duration must be greater than zero")]
    InvalidDuration,

    #[error("slice period must be at least one second")]
    InvalidSlice,

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("commitment exceeds the withdrawable reserve: requested {requested}, withdrawable {withdrawable}")]
    InsufficientReserve {
        requested: u128,
        withdrawable: u128,
    },

    #[error("beneficiary already has a schedule")]
    ScheduleExists,

    #[error("no schedule for this beneficiary")]
    UnknownBeneficiary,

    #[error("only the beneficiary or an administrator can release vested tokens")]
    Unauthorized,

    #[error("cannot release more than the vested amount: requested {requested}, releasable {releasable}")]
    ExceedsReleasable { requested: u128, releasable: u128 },

    #[error("arithmetic overflow")]
    Overflow,

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("storage error: {0}")]
    Storage(String),
}
