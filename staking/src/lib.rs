//! Staking pool for the Cinder token.
//!
//! Balances lock into the pool for a configured window; unstaking inside
//! the window pays out principal minus a flat basis-point penalty routed to
//! the fee wallet, and unstaking after it returns the full principal — no
//! reward accrual. All token movement goes through the ledger.

pub mod error;
pub mod pool;
pub mod position;

pub use error::StakingError;
pub use pool::{StakingPool, UnstakeReceipt};
pub use position::StakePosition;
