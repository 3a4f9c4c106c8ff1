// Token Access Control
//
// A single owner identity gates the configuration operations
// (pause, burn policy, mint, send, ownership transfer).

use log::{debug, trace, warn};

use super::validation::validate_owner;
use super::{RuntimeContext, TokenStorage};
use crate::crypto::Address;
use crate::token::{TokenError, TokenEvent, TokenResult};

/// Check whether `who` is the current owner
pub fn is_owner<S: TokenStorage + ?Sized>(storage: &S, who: &Address) -> bool {
    storage.owner() == *who
}

/// Fail with `Unauthorized` unless the caller is the owner
pub fn require_owner<S: TokenStorage + ?Sized>(
    storage: &S,
    ctx: &RuntimeContext,
) -> TokenResult<()> {
    if !is_owner(storage, &ctx.caller) {
        if log::log_enabled!(log::Level::Warn) {
            warn!("Rejected owner-only call from {}", ctx.caller);
        }
        return Err(TokenError::Unauthorized);
    }

    if log::log_enabled!(log::Level::Trace) {
        trace!("owner check passed for {}", ctx.caller);
    }
    Ok(())
}

/// Hand the ledger over to a new owner
///
/// # Returns
/// * `Ok(())` on success
/// * `Err(TokenError::Unauthorized)` if caller is not the owner
/// * `Err(TokenError::InvalidOwner)` if `new_owner` is the zero address
pub fn transfer_ownership<S: TokenStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
    new_owner: &Address,
) -> TokenResult<()> {
    require_owner(storage, ctx)?;
    validate_owner(new_owner)?;

    let previous = storage.owner();
    storage.set_owner(*new_owner);
    storage.emit(TokenEvent::OwnershipTransferred {
        previous,
        owner: *new_owner,
    });

    if log::log_enabled!(log::Level::Debug) {
        debug!("Ownership transferred from {} to {}", previous, new_owner);
    }
    Ok(())
}
