//! Staking error type.

use cinder_ledger::LedgerError;
use cinder_types::ParamsError;
use thiserror::Error;

/// Errors produced by the staking pool.
///
/// Every error leaves positions, the share counter, and ledger balances
/// untouched.
#[derive(Debug, Error)]
pub enum StakingError {
    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("staker already has an open position")]
    PositionExists,

    #[error("no active position for this staker")]
    NoActivePosition,

    #[error("caller is not authorized for this operation")]
    Unauthorized,

    #[error("arithmetic overflow")]
    Overflow,

    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("storage error: {0}")]
    Storage(String),
}
