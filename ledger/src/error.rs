//! Ledger error type.

use cinder_types::ParamsError;
use thiserror::Error;

/// Errors produced by the transfer engine.
///
/// Every error leaves balances, whitelist, and supply counters untouched.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("caller is not authorized for this operation")]
    Unauthorized,

    #[error("arithmetic overflow")]
    Overflow,

    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error("storage error: {0}")]
    Storage(String),
}
