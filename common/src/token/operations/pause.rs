// Token Pause Gate
//
// Two states, Unpaused (initial) and Paused. Only the owner moves between
// them, and redundant toggles are rejected. While paused, every
// transfer-family operation fails with ContractPaused.

use log::{debug, trace};

use super::access::require_owner;
use super::{RuntimeContext, TokenStorage};
use crate::token::{TokenError, TokenEvent, TokenResult};

/// Fail with `ContractPaused` while the gate is closed
pub fn require_not_paused<S: TokenStorage + ?Sized>(storage: &S) -> TokenResult<()> {
    if storage.is_paused() {
        if log::log_enabled!(log::Level::Trace) {
            trace!("call rejected: contract is paused");
        }
        return Err(TokenError::ContractPaused);
    }
    Ok(())
}

/// Pause all transfers
///
/// # Returns
/// * `Ok(())` on success
/// * `Err(TokenError::Unauthorized)` if caller is not the owner
/// * `Err(TokenError::AlreadyPaused)` if the ledger is already paused
pub fn pause<S: TokenStorage>(storage: &mut S, ctx: &RuntimeContext) -> TokenResult<()> {
    require_owner(storage, ctx)?;

    if storage.is_paused() {
        return Err(TokenError::AlreadyPaused);
    }

    storage.set_paused(true);
    storage.emit(TokenEvent::Paused { by: ctx.caller });

    if log::log_enabled!(log::Level::Debug) {
        debug!("Ledger paused by {}", ctx.caller);
    }
    Ok(())
}

/// Resume transfers
///
/// # Returns
/// * `Ok(())` on success
/// * `Err(TokenError::Unauthorized)` if caller is not the owner
/// * `Err(TokenError::NotPaused)` if the ledger is not paused
pub fn unpause<S: TokenStorage>(storage: &mut S, ctx: &RuntimeContext) -> TokenResult<()> {
    require_owner(storage, ctx)?;

    if !storage.is_paused() {
        return Err(TokenError::NotPaused);
    }

    storage.set_paused(false);
    storage.emit(TokenEvent::Unpaused { by: ctx.caller });

    if log::log_enabled!(log::Level::Debug) {
        debug!("Ledger unpaused by {}", ctx.caller);
    }
    Ok(())
}
