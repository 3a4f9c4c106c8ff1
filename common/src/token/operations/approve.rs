// Token Allowance Operations

use log::debug;
use primitive_types::U256;

use super::validation::validate_spender;
use super::{RuntimeContext, TokenStorage};
use crate::crypto::Address;
use crate::token::{TokenEvent, TokenResult};

/// Set the caller's allowance for `spender` to exactly `amount`
///
/// Overwrites any previous value. Available while paused.
///
/// # Returns
/// * `Ok(())` on success
/// * `Err(TokenError::InvalidRecipient)` if `spender` is the zero address
///   and `amount` is non-zero
pub fn approve<S: TokenStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
    spender: &Address,
    amount: U256,
) -> TokenResult<()> {
    validate_spender(spender, amount.is_zero())?;

    storage.set_allowance(&ctx.caller, spender, amount);
    storage.emit(TokenEvent::Approval {
        owner: ctx.caller,
        spender: *spender,
        amount,
    });

    if log::log_enabled!(log::Level::Debug) {
        debug!("Approval {} -> {}: {}", ctx.caller, spender, amount);
    }
    Ok(())
}
