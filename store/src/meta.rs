//! Small-value metadata storage trait.

use crate::StoreError;

/// Key-value storage for engine counters (total supply, total burned,
/// pool-wide shares). Values are small byte strings written atomically
/// with the operation that produced them.
pub trait MetaStore {
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
}
