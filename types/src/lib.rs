//! Fundamental types for the Cinder token ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account addresses, timestamps, the clock capability, protocol
//! parameters, the authorization policy seam, and observable events.

pub mod address;
pub mod auth;
pub mod clock;
pub mod event;
pub mod params;
pub mod time;

pub use address::AccountAddress;
pub use auth::{AdminOp, AuthorizationPolicy};
pub use clock::{Clock, SystemClock};
pub use event::TokenEvent;
pub use params::{FeeSchedule, ParamsError, StakingParams, BPS_DENOMINATOR};
pub use time::Timestamp;
