//! Stake position storage trait.

use crate::StoreError;
use cinder_types::AccountAddress;

/// Durable storage for open stake positions, keyed by staker.
///
/// Positions are opaque bytes (bincode-encoded by the staking engine).
/// Closed positions are deleted rather than tombstoned.
pub trait PositionStore {
    fn put_position(&self, staker: &AccountAddress, bytes: &[u8]) -> Result<(), StoreError>;
    fn get_position(&self, staker: &AccountAddress) -> Result<Vec<u8>, StoreError>;
    fn delete_position(&self, staker: &AccountAddress) -> Result<(), StoreError>;
    fn iter_positions(&self) -> Result<Vec<(AccountAddress, Vec<u8>)>, StoreError>;
}
