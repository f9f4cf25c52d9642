//! Vesting schedule storage trait.

use crate::StoreError;
use cinder_types::AccountAddress;

/// Durable storage for vesting schedules, keyed by beneficiary.
///
/// Records are opaque bytes (bincode-encoded by the vesting engine) so the
/// storage layer stays decoupled from the schedule layout.
pub trait ScheduleStore {
    fn put_schedule(&self, beneficiary: &AccountAddress, bytes: &[u8]) -> Result<(), StoreError>;
    fn get_schedule(&self, beneficiary: &AccountAddress) -> Result<Vec<u8>, StoreError>;
    fn iter_schedules(&self) -> Result<Vec<(AccountAddress, Vec<u8>)>, StoreError>;
}
