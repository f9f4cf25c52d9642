//! Authorization policy seam.
//!
//! Administrative gating is a single yes/no question asked of an external
//! policy. The concrete policy (single owner, multi-role) lives outside the
//! core; `cinder-nullables` provides a fixed-owner policy for tests.

use crate::AccountAddress;

/// Administrative operations that require authorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdminOp {
    /// Add or remove fee-exempt accounts.
    ManageWhitelist,
    /// Commit scheduler-held tokens to a new vesting schedule.
    CreateSchedule,
    /// Release vested tokens on behalf of a beneficiary.
    ReleaseVested,
    /// Reconfigure the staking pool's penalty wallet.
    ConfigurePool,
}

/// Decides whether a caller may perform an administrative operation.
pub trait AuthorizationPolicy: Send + Sync {
    fn is_authorized(&self, caller: &AccountAddress, op: AdminOp) -> bool;
}
