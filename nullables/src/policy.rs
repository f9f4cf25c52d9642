//! Nullable authorization policies.

use cinder_types::{AccountAddress, AdminOp, AuthorizationPolicy};

/// Authorizes a single fixed owner for every administrative operation.
///
/// This mirrors the simplest production deployment (one admin key) and is
/// the default policy in the integration suites.
pub struct FixedOwnerPolicy {
    owner: AccountAddress,
}

impl FixedOwnerPolicy {
    pub fn new(owner: AccountAddress) -> Self {
        Self { owner }
    }
}

impl AuthorizationPolicy for FixedOwnerPolicy {
    fn is_authorized(&self, caller: &AccountAddress, _op: AdminOp) -> bool {
        caller == &self.owner
    }
}

/// Authorizes everyone for everything. For tests that don't exercise gating.
pub struct AllowAllPolicy;

impl AuthorizationPolicy for AllowAllPolicy {
    fn is_authorized(&self, _caller: &AccountAddress, _op: AdminOp) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_owner_only_authorizes_owner() {
        let owner = AccountAddress::new("cndr_owner");
        let other = AccountAddress::new("cndr_other");
        let policy = FixedOwnerPolicy::new(owner.clone());

        assert!(policy.is_authorized(&owner, AdminOp::ManageWhitelist));
        assert!(policy.is_authorized(&owner, AdminOp::CreateSchedule));
        assert!(!policy.is_authorized(&other, AdminOp::ReleaseVested));
    }
}
