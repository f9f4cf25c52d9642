//! The vesting schedule record and its release arithmetic.

use cinder_types::{AccountAddress, Timestamp};
use serde::{Deserialize, Serialize};

/// One vesting schedule per beneficiary.
///
/// Immutable once created except for `released`. Fully released schedules
/// are kept (and remain queryable) rather than deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingSchedule {
    pub beneficiary: AccountAddress,
    /// When vesting begins.
    pub start: Timestamp,
    /// Total vesting period in seconds.
    pub duration_secs: u64,
    /// Granularity of release: elapsed time is truncated down to a whole
    /// number of slices before any amount vests.
    pub slice_secs: u64,
    /// Total committed amount (gross token units).
    pub total: u128,
    /// Gross amount released so far. Never exceeds `total`.
    pub released: u128,
}

impl VestingSchedule {
    /// The gross amount vested at `now`.
    ///
    /// Zero before `start`, the full total at or after `start + duration`,
    /// and `floor(total * whole_slices / duration)` in between. Returns
    /// `None` on arithmetic overflow.
    pub fn vested_at(&self, now: Timestamp) -> Option<u128> {
        if now < self.start {
            return Some(0);
        }
        let elapsed = self.start.elapsed_since(now);
        if elapsed >= self.duration_secs {
            return Some(self.total);
        }
        let whole_slices = elapsed / self.slice_secs * self.slice_secs;
        self.total
            .checked_mul(whole_slices as u128)
            .map(|scaled| scaled / self.duration_secs as u128)
    }

    /// The vested amount not yet withdrawn at `now`.
    pub fn releasable_at(&self, now: Timestamp) -> Option<u128> {
        self.vested_at(now)
            .map(|vested| vested.saturating_sub(self.released))
    }

    /// The gross amount still committed to this schedule.
    pub fn outstanding(&self) -> u128 {
        self.total - self.released
    }

    /// Whether every committed token has been released.
    pub fn is_fully_released(&self) -> bool {
        self.released == self.total
    }
}
