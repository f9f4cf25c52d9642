//! Fee-split transfer engine for the Cinder token.
//!
//! The ledger is the single source of truth for balances. Every token
//! movement in the system — direct transfers, vesting releases, stake
//! deposits and payouts — goes through [`TokenLedger::transfer`], which
//! deducts and redistributes the transfer fee unless an endpoint is
//! fee-exempt.

pub mod error;
pub mod fee;
pub mod ledger;

pub use error::LedgerError;
pub use fee::TransferReceipt;
pub use ledger::TokenLedger;
