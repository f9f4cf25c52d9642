//! Nullable store — thread-safe in-memory storage for testing.

use cinder_store::{LedgerStore, MetaStore, PositionStore, ScheduleStore, StoreError};
use cinder_types::AccountAddress;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// An in-memory implementation of every Cinder store trait.
///
/// Thread-safe so a single instance can back several engines at once.
pub struct NullStore {
    balances: Mutex<HashMap<String, u128>>,
    whitelist: Mutex<HashSet<String>>,
    schedules: Mutex<HashMap<String, Vec<u8>>>,
    positions: Mutex<HashMap<String, Vec<u8>>>,
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            whitelist: Mutex::new(HashSet::new()),
            schedules: Mutex::new(HashMap::new()),
            positions: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for NullStore {
    fn put_balance(&self, account: &AccountAddress, balance: u128) -> Result<(), StoreError> {
        self.balances
            .lock()
            .unwrap()
            .insert(account.to_string(), balance);
        Ok(())
    }

    fn get_balance(&self, account: &AccountAddress) -> Result<Option<u128>, StoreError> {
        Ok(self.balances.lock().unwrap().get(account.as_str()).copied())
    }

    fn iter_balances(&self) -> Result<Vec<(AccountAddress, u128)>, StoreError> {
        Ok(self
            .balances
            .lock()
            .unwrap()
            .iter()
            .map(|(k, v)| (AccountAddress::new(k.clone()), *v))
            .collect())
    }

    fn put_whitelisted(&self, account: &AccountAddress) -> Result<(), StoreError> {
        self.whitelist.lock().unwrap().insert(account.to_string());
        Ok(())
    }

    fn remove_whitelisted(&self, account: &AccountAddress) -> Result<(), StoreError> {
        self.whitelist.lock().unwrap().remove(account.as_str());
        Ok(())
    }

    fn iter_whitelist(&self) -> Result<Vec<AccountAddress>, StoreError> {
        Ok(self
            .whitelist
            .lock()
            .unwrap()
            .iter()
            .map(|k| AccountAddress::new(k.clone()))
            .collect())
    }
}

impl ScheduleStore for NullStore {
    fn put_schedule(&self, beneficiary: &AccountAddress, bytes: &[u8]) -> Result<(), StoreError> {
        self.schedules
            .lock()
            .unwrap()
            .insert(beneficiary.to_string(), bytes.to_vec());
        Ok(())
    }

    fn get_schedule(&self, beneficiary: &AccountAddress) -> Result<Vec<u8>, StoreError> {
        self.schedules
            .lock()
            .unwrap()
            .get(beneficiary.as_str())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(beneficiary.to_string()))
    }

    fn iter_schedules(&self) -> Result<Vec<(AccountAddress, Vec<u8>)>, StoreError> {
        Ok(self
            .schedules
            .lock()
            .unwrap()
            .iter()
            .map(|(k, v)| (AccountAddress::new(k.clone()), v.clone()))
            .collect())
    }
}

impl PositionStore for NullStore {
    fn put_position(&self, staker: &AccountAddress, bytes: &[u8]) -> Result<(), StoreError> {
        self.positions
            .lock()
            .unwrap()
            .insert(staker.to_string(), bytes.to_vec());
        Ok(())
    }

    fn get_position(&self, staker: &AccountAddress) -> Result<Vec<u8>, StoreError> {
        self.positions
            .lock()
            .unwrap()
            .get(staker.as_str())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(staker.to_string()))
    }

    fn delete_position(&self, staker: &AccountAddress) -> Result<(), StoreError> {
        self.positions.lock().unwrap().remove(staker.as_str());
        Ok(())
    }

    fn iter_positions(&self) -> Result<Vec<(AccountAddress, Vec<u8>)>, StoreError> {
        Ok(self
            .positions
            .lock()
            .unwrap()
            .iter()
            .map(|(k, v)| (AccountAddress::new(k.clone()), v.clone()))
            .collect())
    }
}

impl MetaStore for NullStore {
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }
}
