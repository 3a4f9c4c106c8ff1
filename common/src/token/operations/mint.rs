// Token Supply Operations
//
// New supply is always credited to the ledger's own account. The owner
// distributes it from there with `send`.

use log::debug;
use primitive_types::U256;

use super::access::require_owner;
use super::pause::require_not_paused;
use super::validation::validate_recipient;
use super::{RuntimeContext, TokenStorage};
use crate::crypto::Address;
use crate::token::{TokenError, TokenEvent, TokenResult, TransferAmounts};

/// Create `amount` new tokens on the contract account
///
/// Not gated by the pause state.
///
/// # Returns
/// * `Ok(())` on success
/// * `Err(TokenError::Unauthorized)` if caller is not the owner
/// * `Err(TokenError::Overflow)` if total supply or the balance overflows
pub fn mint<S: TokenStorage>(storage: &mut S, ctx: &RuntimeContext, amount: U256) -> TokenResult<()> {
    // 1. Check permission
    require_owner(storage, ctx)?;

    // 2. Compute new values
    let contract = storage.contract_address();
    let new_supply = storage
        .total_supply()
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    let new_balance = storage
        .balance_of(&contract)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;

    // 3. Write
    storage.set_total_supply(new_supply);
    storage.set_balance(&contract, new_balance);
    storage.emit(TokenEvent::Mint {
        to: contract,
        amount,
    });

    if log::log_enabled!(log::Level::Debug) {
        debug!("Minted {} (total supply {})", amount, new_supply);
    }
    Ok(())
}

/// Move `amount` from the contract account to `to`
///
/// Distribution never burns, whatever the burn policy.
///
/// # Returns
/// * `Ok(())` on success
/// * `Err(TokenError::Unauthorized)` if caller is not the owner
/// * `Err(TokenError::ContractPaused)` if the ledger is paused
/// * `Err(TokenError::InvalidRecipient)` if `to` is the zero address
/// * `Err(TokenError::InsufficientBalance)` if the contract account holds too little
pub fn send<S: TokenStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
    to: &Address,
    amount: U256,
) -> TokenResult<()> {
    require_owner(storage, ctx)?;
    require_not_paused(storage)?;
    validate_recipient(to)?;

    let contract = storage.contract_address();
    let amounts = TransferAmounts::without_burn(amount);
    let plan = super::transfer::plan_move(storage, &contract, to, &amounts)?;
    super::transfer::apply_move(storage, &contract, to, &amounts, &plan);

    if log::log_enabled!(log::Level::Debug) {
        debug!("Sent {} from contract account to {}", amount, to);
    }
    Ok(())
}
