//! The clock capability.
//!
//! Time-dependent logic (vesting, staking penalties) asks a `Clock` for the
//! current time instead of reading the system clock. Production code uses
//! [`SystemClock`]; tests inject the controllable clock from
//! `cinder-nullables`.

use crate::Timestamp;

/// Supplies the current logical time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Production clock backed by the host system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}
