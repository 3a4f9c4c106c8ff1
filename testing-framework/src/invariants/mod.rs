//! Core invariant checkers
//!
//! Implements ledger invariants:
//! - Balance conservation (sum of balances equals total supply)
//! - Owner presence (the owner is never the zero address)
//! - State equivalence (a rejected call leaves the state untouched)

use anyhow::{ensure, Context, Result};
use legacy_common::token::operations::TokenStorage;
use legacy_common::token::LedgerState;

/// Names accepted in the `invariants` list of a scenario
pub const KNOWN_INVARIANTS: [&str; 2] = ["balance_conservation", "owner_present"];

/// Check that the sum of all balances equals the total supply
pub fn check_balance_conservation(state: &LedgerState) -> Result<()> {
    let sum = state
        .sum_of_balances()
        .context("Sum of balances overflows 256 bits")?;
    let supply = state.total_supply();

    ensure!(
        sum == supply,
        "Balance conservation violated: sum of balances {} != total supply {}",
        sum,
        supply
    );
    Ok(())
}

/// Check that the ledger always has a real owner
pub fn check_owner_present(state: &LedgerState) -> Result<()> {
    ensure!(!state.owner().is_zero(), "Owner is the zero address");
    Ok(())
}

/// Check that a state matches a snapshot taken earlier
///
/// Compares every field, including the event log.
pub fn check_state_unchanged(before: &LedgerState, after: &LedgerState) -> Result<()> {
    ensure!(
        before.owner() == after.owner(),
        "Owner changed: {} -> {}",
        before.owner(),
        after.owner()
    );
    ensure!(
        before.is_paused() == after.is_paused(),
        "Pause state changed: {} -> {}",
        before.is_paused(),
        after.is_paused()
    );
    ensure!(
        before.burn_policy() == after.burn_policy(),
        "Burn policy changed: {:?} -> {:?}",
        before.burn_policy(),
        after.burn_policy()
    );
    ensure!(
        before.total_supply() == after.total_supply(),
        "Total supply changed: {} -> {}",
        before.total_supply(),
        after.total_supply()
    );
    ensure!(
        before.balances().eq(after.balances()),
        "Balances changed"
    );
    ensure!(
        before.allowances().eq(after.allowances()),
        "Allowances changed"
    );
    ensure!(
        before.events() == after.events(),
        "Events recorded: {} -> {}",
        before.events().len(),
        after.events().len()
    );
    Ok(())
}

/// Run an invariant by name
pub fn check_named(name: &str, state: &LedgerState) -> Result<()> {
    match name {
        "balance_conservation" => check_balance_conservation(state),
        "owner_present" => check_owner_present(state),
        other => anyhow::bail!("Unknown invariant: {}", other),
    }
}
