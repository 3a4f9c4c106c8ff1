// Token Input Validation Helpers

use crate::crypto::Address;
use crate::token::{TokenError, TokenResult};

/// Validate recipient address (must be non-zero)
pub fn validate_recipient(recipient: &Address) -> TokenResult<()> {
    if recipient.is_zero() {
        return Err(TokenError::InvalidRecipient);
    }
    Ok(())
}

/// Validate an allowance grant
///
/// The zero spender is only accepted to clear an allowance.
pub fn validate_spender(spender: &Address, amount_is_zero: bool) -> TokenResult<()> {
    if spender.is_zero() && !amount_is_zero {
        return Err(TokenError::InvalidRecipient);
    }
    Ok(())
}

/// Validate a new owner (must be non-zero)
pub fn validate_owner(owner: &Address) -> TokenResult<()> {
    if owner.is_zero() {
        return Err(TokenError::InvalidOwner);
    }
    Ok(())
}
