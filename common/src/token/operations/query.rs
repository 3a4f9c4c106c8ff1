// Token Query Operations (read-only)

use primitive_types::U256;

use super::TokenStorage;
use crate::crypto::Address;

/// Get balance of an account
pub fn balance_of<S: TokenStorage + ?Sized>(storage: &S, account: &Address) -> U256 {
    storage.balance_of(account)
}

/// Get the amount `spender` may still move out of `owner`'s balance
pub fn allowance<S: TokenStorage + ?Sized>(storage: &S, owner: &Address, spender: &Address) -> U256 {
    storage.allowance(owner, spender)
}

pub fn total_supply<S: TokenStorage + ?Sized>(storage: &S) -> U256 {
    storage.total_supply()
}

pub fn paused<S: TokenStorage + ?Sized>(storage: &S) -> bool {
    storage.is_paused()
}

/// Configured burn rate, per mille
pub fn burn_rate<S: TokenStorage + ?Sized>(storage: &S) -> u64 {
    storage.burn_policy().rate
}

pub fn is_transfer_with_burn_enabled<S: TokenStorage + ?Sized>(storage: &S) -> bool {
    storage.burn_policy().enabled
}

pub fn owner<S: TokenStorage + ?Sized>(storage: &S) -> Address {
    storage.owner()
}
