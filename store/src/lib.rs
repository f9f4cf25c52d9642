//! Abstract storage traits for the Cinder token ledger.
//!
//! Every storage backend (embedded KV, SQL, in-memory for testing)
//! implements these traits. The engines depend only on the traits; the
//! in-memory nullable in `cinder-nullables` is the reference backend used
//! by the test suites.

pub mod error;
pub mod ledger;
pub mod meta;
pub mod position;
pub mod schedule;

pub use error::StoreError;
pub use ledger::LedgerStore;
pub use meta::MetaStore;
pub use position::PositionStore;
pub use schedule::ScheduleStore;
