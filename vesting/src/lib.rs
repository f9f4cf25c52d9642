//! Linear vesting scheduler for the Cinder token.
//!
//! Schedules release a committed allocation to a beneficiary over time,
//! truncated to whole slices. Schedule accounting is denominated in gross
//! amounts; the tokens a beneficiary actually receives are the fee-adjusted
//! net of the ledger transfer that pays them out.

pub mod error;
pub mod schedule;
pub mod scheduler;

pub use error::VestingError;
pub use schedule::VestingSchedule;
pub use scheduler::VestingScheduler;
