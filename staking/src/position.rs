//! The stake position record.

use cinder_types::{AccountAddress, Timestamp};
use serde::{Deserialize, Serialize};

/// One open position per staker.
///
/// Created on stake, destroyed on unstake; there are no intermediate
/// states.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakePosition {
    pub staker: AccountAddress,
    /// The gross amount the staker committed.
    pub principal: u128,
    /// When the position was opened; the penalty window counts from here.
    pub started_at: Timestamp,
}

impl StakePosition {
    /// Whether the penalty window has fully elapsed at `now`.
    pub fn window_elapsed(&self, window_secs: u64, now: Timestamp) -> bool {
        self.started_at.has_expired(window_secs, now)
    }
}
