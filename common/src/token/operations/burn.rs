// Token Burn Policy Operations
//
// The enable flag and the rate are configured separately. Toggling the
// flag is idempotent; the rate is bounded by MAX_BURN_RATE.

use log::debug;

use super::access::require_owner;
use super::{RuntimeContext, TokenStorage};
use crate::token::{BurnPolicy, TokenEvent, TokenResult};

/// Turn burn-on-transfer on (no-op if already on)
pub fn enable_transfer_with_burn<S: TokenStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
) -> TokenResult<()> {
    set_burn_enabled(storage, ctx, true)
}

/// Turn burn-on-transfer off (no-op if already off)
pub fn disable_transfer_with_burn<S: TokenStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
) -> TokenResult<()> {
    set_burn_enabled(storage, ctx, false)
}

fn set_burn_enabled<S: TokenStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
    enabled: bool,
) -> TokenResult<()> {
    require_owner(storage, ctx)?;

    let mut policy = storage.burn_policy();
    policy.enabled = enabled;
    storage.set_burn_policy(policy);

    let event = if enabled {
        TokenEvent::TransferWithBurnEnabled { by: ctx.caller }
    } else {
        TokenEvent::TransferWithBurnDisabled { by: ctx.caller }
    };
    storage.emit(event);

    if log::log_enabled!(log::Level::Debug) {
        debug!(
            "Transfer with burn {} by {} (rate {})",
            if enabled { "enabled" } else { "disabled" },
            ctx.caller,
            policy.rate
        );
    }
    Ok(())
}

/// Set the per-mille burn rate
///
/// The rate is stored regardless of whether burning is enabled.
///
/// # Returns
/// * `Ok(())` on success
/// * `Err(TokenError::Unauthorized)` if caller is not the owner
/// * `Err(TokenError::InvalidBurnRate)` if `rate` exceeds 1000
pub fn set_burn_rate<S: TokenStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
    rate: u64,
) -> TokenResult<()> {
    require_owner(storage, ctx)?;
    BurnPolicy::validate_rate(rate)?;

    let mut policy = storage.burn_policy();
    let previous = policy.rate;
    policy.rate = rate;
    storage.set_burn_policy(policy);
    storage.emit(TokenEvent::BurnRateUpdated { previous, rate });

    if log::log_enabled!(log::Level::Debug) {
        debug!("Burn rate updated: {} -> {} per mille", previous, rate);
    }
    Ok(())
}
