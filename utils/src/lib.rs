//! Shared utilities for the Cinder token ledger.

pub mod events;
pub mod logging;

pub use events::EventBus;
pub use logging::init_tracing;
