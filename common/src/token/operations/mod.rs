// Token Operations Module
// This module contains the core business logic for ledger operations.
//
// The operations are designed to be runtime-agnostic:
// - State access is abstracted via the TokenStorage trait
// - The caller identity is passed in explicitly through RuntimeContext
// - Every operation validates first and writes last, so a failed call
//   leaves the state untouched

mod access;
mod approve;
mod burn;
mod mint;
mod pause;
mod query;
mod transfer;
mod validation;

pub use access::*;
pub use approve::*;
pub use burn::*;
pub use mint::*;
pub use pause::*;
pub use query::*;
pub use transfer::*;
pub use validation::*;

use primitive_types::U256;

use crate::crypto::Address;
use crate::token::{BurnPolicy, TokenEvent};

// ========================================
// Storage Trait (for dependency injection)
// ========================================

/// Abstract state interface for ledger operations
///
/// Reads of unknown accounts return zero. Writes cannot fail: operations
/// perform every check before their first write.
pub trait TokenStorage {
    // Access control
    fn owner(&self) -> Address;
    fn set_owner(&mut self, owner: Address);

    /// The ledger's own account, holding the initial supply and every mint
    fn contract_address(&self) -> Address;

    // Pause gate
    fn is_paused(&self) -> bool;
    fn set_paused(&mut self, paused: bool);

    // Burn policy
    fn burn_policy(&self) -> BurnPolicy;
    fn set_burn_policy(&mut self, policy: BurnPolicy);

    // Supply and balances
    fn total_supply(&self) -> U256;
    fn set_total_supply(&mut self, supply: U256);
    fn balance_of(&self, account: &Address) -> U256;
    fn set_balance(&mut self, account: &Address, amount: U256);

    // Allowances
    fn allowance(&self, owner: &Address, spender: &Address) -> U256;
    fn set_allowance(&mut self, owner: &Address, spender: &Address, amount: U256);

    // Event sink (optional)
    fn emit(&mut self, event: TokenEvent) {
        // Default: events are dropped
        let _ = event;
    }
}

// ========================================
// Runtime Context
// ========================================

/// Runtime context providing the identity of the current caller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeContext {
    /// Current caller (reported by the execution environment)
    pub caller: Address,
}

impl RuntimeContext {
    /// Create a new runtime context
    pub fn new(caller: Address) -> Self {
        Self { caller }
    }
}
