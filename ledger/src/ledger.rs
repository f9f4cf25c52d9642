//! The balance table and transfer engine.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::fee::TransferReceipt;
use crate::LedgerError;
use cinder_store::{LedgerStore, MetaStore};
use cinder_types::{AccountAddress, AdminOp, AuthorizationPolicy, FeeSchedule, TokenEvent};
use cinder_utils::EventBus;

const TOTAL_SUPPLY_META_KEY: &[u8] = b"ledger_total_supply";
const TOTAL_BURNED_META_KEY: &[u8] = b"ledger_total_burned";
const INITIAL_SUPPLY_META_KEY: &[u8] = b"ledger_initial_supply";

/// The token ledger — fixed initial supply, fee-bearing transfers, burn
/// accounting.
///
/// Conservation law: at every point in time the sum of all balances plus
/// `total_burned` equals the initial supply. Transfers are all-or-nothing:
/// validation happens before the first balance is touched.
pub struct TokenLedger {
    balances: HashMap<AccountAddress, u128>,
    whitelist: HashSet<AccountAddress>,
    initial_supply: u128,
    total_supply: u128,
    total_burned: u128,
    reward_wallet: AccountAddress,
    liquidity_wallet: AccountAddress,
    fees: FeeSchedule,
    policy: Arc<dyn AuthorizationPolicy>,
    events: EventBus<TokenEvent>,
}

impl TokenLedger {
    /// Create a ledger with the full initial supply credited to `owner`.
    pub fn new(
        initial_supply: u128,
        owner: AccountAddress,
        reward_wallet: AccountAddress,
        liquidity_wallet: AccountAddress,
        fees: FeeSchedule,
        policy: Arc<dyn AuthorizationPolicy>,
    ) -> Result<Self, LedgerError> {
        fees.validate()?;
        let mut balances = HashMap::new();
        balances.insert(owner, initial_supply);
        Ok(Self {
            balances,
            whitelist: HashSet::new(),
            initial_supply,
            total_supply: initial_supply,
            total_burned: 0,
            reward_wallet,
            liquidity_wallet,
            fees,
            policy,
            events: EventBus::new(),
        })
    }

    /// Move `amount` from `from` to `to`, splitting the fee unless either
    /// endpoint is whitelisted.
    ///
    /// Zero-amount transfers succeed and move nothing. On any error the
    /// ledger is unchanged.
    pub fn transfer(
        &mut self,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: u128,
    ) -> Result<TransferReceipt, LedgerError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        }

        let receipt = if self.is_whitelisted(from) || self.is_whitelisted(to) {
            TransferReceipt::exempt(amount)
        } else {
            TransferReceipt::split(&self.fees, amount)?
        };

        // Validation is complete; apply all five deltas. Credits cannot
        // overflow: every balance stays below the conserved initial supply.
        *self.balances.entry(from.clone()).or_insert(0) -= amount;
        *self.balances.entry(to.clone()).or_insert(0) += receipt.net;
        *self.balances.entry(self.reward_wallet.clone()).or_insert(0) += receipt.reward_share;
        *self
            .balances
            .entry(self.liquidity_wallet.clone())
            .or_insert(0) += receipt.liquidity_share;
        self.total_supply -= receipt.burn_share;
        self.total_burned += receipt.burn_share;

        tracing::debug!(
            %from,
            %to,
            gross = receipt.gross,
            net = receipt.net,
            burned = receipt.burn_share,
            "transfer committed"
        );
        self.events.emit(&TokenEvent::TransferCompleted {
            from: from.clone(),
            to: to.clone(),
            gross: receipt.gross,
            net: receipt.net,
        });

        Ok(receipt)
    }

    /// Current balance of an account (zero if never touched).
    pub fn balance_of(&self, account: &AccountAddress) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Tokens still in circulation.
    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    /// Tokens permanently removed from circulation.
    pub fn total_burned(&self) -> u128 {
        self.total_burned
    }

    /// The supply the ledger was created with.
    pub fn initial_supply(&self) -> u128 {
        self.initial_supply
    }

    /// Exempt accounts from the transfer fee. Gated by the authorization
    /// policy.
    pub fn add_to_whitelist(
        &mut self,
        caller: &AccountAddress,
        accounts: &[AccountAddress],
    ) -> Result<(), LedgerError> {
        if !self.policy.is_authorized(caller, AdminOp::ManageWhitelist) {
            return Err(LedgerError::Unauthorized);
        }
        for account in accounts {
            self.whitelist.insert(account.clone());
        }
        Ok(())
    }

    /// Re-subject accounts to the transfer fee. Gated by the authorization
    /// policy.
    pub fn remove_from_whitelist(
        &mut self,
        caller: &AccountAddress,
        accounts: &[AccountAddress],
    ) -> Result<(), LedgerError> {
        if !self.policy.is_authorized(caller, AdminOp::ManageWhitelist) {
            return Err(LedgerError::Unauthorized);
        }
        for account in accounts {
            self.whitelist.remove(account);
        }
        Ok(())
    }

    pub fn is_whitelisted(&self, account: &AccountAddress) -> bool {
        self.whitelist.contains(account)
    }

    /// Verify the conservation law over the whole balance table.
    pub fn check_conservation(&self) -> bool {
        let circulating: u128 = self.balances.values().sum();
        circulating == self.total_supply && circulating + self.total_burned == self.initial_supply
    }

    /// Subscribe to events emitted by this ledger.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(&TokenEvent) + Send + Sync>) {
        self.events.subscribe(listener);
    }
}

impl TokenLedger {
    /// Persist balances, whitelist, and supply counters.
    pub fn save_to_store(
        &self,
        store: &dyn LedgerStore,
        meta: &dyn MetaStore,
    ) -> Result<(), LedgerError> {
        for (account, balance) in &self.balances {
            store
                .put_balance(account, *balance)
                .map_err(|e| LedgerError::Storage(e.to_string()))?;
        }
        for account in &self.whitelist {
            store
                .put_whitelisted(account)
                .map_err(|e| LedgerError::Storage(e.to_string()))?;
        }
        meta.put_meta(TOTAL_SUPPLY_META_KEY, &self.total_supply.to_be_bytes())
            .map_err(|e| LedgerError::Storage(e.to_string()))?;
        meta.put_meta(TOTAL_BURNED_META_KEY, &self.total_burned.to_be_bytes())
            .map_err(|e| LedgerError::Storage(e.to_string()))?;
        meta.put_meta(INITIAL_SUPPLY_META_KEY, &self.initial_supply.to_be_bytes())
            .map_err(|e| LedgerError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Restore a ledger previously written with [`Self::save_to_store`].
    pub fn load_from_store(
        store: &dyn LedgerStore,
        meta: &dyn MetaStore,
        reward_wallet: AccountAddress,
        liquidity_wallet: AccountAddress,
        fees: FeeSchedule,
        policy: Arc<dyn AuthorizationPolicy>,
    ) -> Result<Self, LedgerError> {
        fees.validate()?;
        let balances = store
            .iter_balances()
            .map_err(|e| LedgerError::Storage(e.to_string()))?
            .into_iter()
            .collect();
        let whitelist = store
            .iter_whitelist()
            .map_err(|e| LedgerError::Storage(e.to_string()))?
            .into_iter()
            .collect();
        Ok(Self {
            balances,
            whitelist,
            initial_supply: read_meta_u128(meta, INITIAL_SUPPLY_META_KEY)?,
            total_supply: read_meta_u128(meta, TOTAL_SUPPLY_META_KEY)?,
            total_burned: read_meta_u128(meta, TOTAL_BURNED_META_KEY)?,
            reward_wallet,
            liquidity_wallet,
            fees,
            policy,
            events: EventBus::new(),
        })
    }
}

fn read_meta_u128(meta: &dyn MetaStore, key: &[u8]) -> Result<u128, LedgerError> {
    let bytes = meta
        .get_meta(key)
        .map_err(|e| LedgerError::Storage(e.to_string()))?
        .ok_or_else(|| LedgerError::Storage(format!("missing meta key {:?}", key)))?;
    let arr: [u8; 16] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| LedgerError::Storage(format!("malformed meta value for {:?}", key)))?;
    Ok(u128::from_be_bytes(arr))
}
