//! Balance and whitelist storage trait.

use crate::StoreError;
use cinder_types::AccountAddress;

/// Durable storage for the balance table and the fee-exemption whitelist.
///
/// Balances are token minor units. Absent accounts read as zero through the
/// engine, so backends only need to record accounts that have been touched.
pub trait LedgerStore {
    fn put_balance(&self, account: &AccountAddress, balance: u128) -> Result<(), StoreError>;
    fn get_balance(&self, account: &AccountAddress) -> Result<Option<u128>, StoreError>;
    fn iter_balances(&self) -> Result<Vec<(AccountAddress, u128)>, StoreError>;

    fn put_whitelisted(&self, account: &AccountAddress) -> Result<(), StoreError>;
    fn remove_whitelisted(&self, account: &AccountAddress) -> Result<(), StoreError>;
    fn iter_whitelist(&self) -> Result<Vec<AccountAddress>, StoreError>;

    /// Count stored balances without materializing them.
    fn balance_count(&self) -> Result<u64, StoreError> {
        self.iter_balances().map(|v| v.len() as u64)
    }
}
