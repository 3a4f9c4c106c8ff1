use indexmap::IndexMap;
use primitive_types::U256;

use crate::crypto::Address;

use super::operations::TokenStorage;
use super::{BurnPolicy, TokenEvent};

/// In-memory ledger state
///
/// Zero balances and zero allowances are not stored, so two states holding
/// the same amounts and the same event log always compare equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerState {
    owner: Address,
    contract: Address,
    paused: bool,
    burn_policy: BurnPolicy,
    total_supply: U256,
    balances: IndexMap<Address, U256>,
    allowances: IndexMap<(Address, Address), U256>,
    events: Vec<TokenEvent>,
}

impl LedgerState {
    /// Fresh state with `initial_supply` credited to the contract account
    pub fn new(owner: Address, contract: Address, initial_supply: U256) -> Self {
        let mut balances = IndexMap::new();
        if !initial_supply.is_zero() {
            balances.insert(contract, initial_supply);
        }

        Self {
            owner,
            contract,
            paused: false,
            burn_policy: BurnPolicy::default(),
            total_supply: initial_supply,
            balances,
            allowances: IndexMap::new(),
            events: Vec::new(),
        }
    }

    /// Accounts holding a non-zero balance, in first-credit order
    pub fn balances(&self) -> impl Iterator<Item = (&Address, &U256)> {
        self.balances.iter()
    }

    /// Non-zero allowances as `((owner, spender), amount)`
    pub fn allowances(&self) -> impl Iterator<Item = (&(Address, Address), &U256)> {
        self.allowances.iter()
    }

    /// Sum of every balance, `None` if it does not fit in 256 bits
    pub fn sum_of_balances(&self) -> Option<U256> {
        self.balances
            .values()
            .try_fold(U256::zero(), |acc, v| acc.checked_add(*v))
    }

    pub fn events(&self) -> &[TokenEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<TokenEvent> {
        std::mem::take(&mut self.events)
    }
}

impl TokenStorage for LedgerState {
    fn owner(&self) -> Address {
        self.owner
    }

    fn set_owner(&mut self, owner: Address) {
        self.owner = owner;
    }

    fn contract_address(&self) -> Address {
        self.contract
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn burn_policy(&self) -> BurnPolicy {
        self.burn_policy
    }

    fn set_burn_policy(&mut self, policy: BurnPolicy) {
        self.burn_policy = policy;
    }

    fn total_supply(&self) -> U256 {
        self.total_supply
    }

    fn set_total_supply(&mut self, supply: U256) {
        self.total_supply = supply;
    }

    fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn set_balance(&mut self, account: &Address, amount: U256) {
        if amount.is_zero() {
            self.balances.shift_remove(account);
        } else {
            self.balances.insert(*account, amount);
        }
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn set_allowance(&mut self, owner: &Address, spender: &Address, amount: U256) {
        if amount.is_zero() {
            self.allowances.shift_remove(&(*owner, *spender));
        } else {
            self.allowances.insert((*owner, *spender), amount);
        }
    }

    fn emit(&mut self, event: TokenEvent) {
        self.events.push(event);
    }
}
