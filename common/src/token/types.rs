//! Token Types
//!
//! Core data structures for the ledger.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::config::{BURN_RATE_DENOMINATOR, MAX_BURN_RATE};

use super::{TokenError, TokenResult};

// ===== Token Metadata =====

/// Immutable token description fixed at deployment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Token name
    pub name: String,
    /// Token symbol/ticker
    pub symbol: String,
    /// Decimal places (0-18)
    pub decimals: u8,
}

// ===== Burn Policy =====

/// Burn-on-transfer settings
///
/// The flag and the rate are independent: a configured rate has no effect
/// while the flag is off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnPolicy {
    /// Whether transfers burn part of the moved amount
    pub enabled: bool,
    /// Burn rate per mille, in `[0, MAX_BURN_RATE]`
    pub rate: u64,
}

impl BurnPolicy {
    /// Check a candidate burn rate against the bound
    pub fn validate_rate(rate: u64) -> TokenResult<()> {
        if rate > MAX_BURN_RATE {
            return Err(TokenError::InvalidBurnRate);
        }
        Ok(())
    }

    /// Amount destroyed when `amount` is moved under this policy
    ///
    /// `floor(amount * rate / 1000)` when enabled, zero otherwise.
    /// Never exceeds `amount`, for every amount up to `U256::MAX`.
    pub fn burn_amount(&self, amount: U256) -> U256 {
        if !self.enabled || self.rate == 0 {
            return U256::zero();
        }

        // Split on the denominator so no intermediate product exceeds amount
        let denom = U256::from(BURN_RATE_DENOMINATOR);
        let rate = U256::from(self.rate);
        (amount / denom) * rate + (amount % denom) * rate / denom
    }
}

/// Outcome of a burn-aware debit/credit, computed before any write
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferAmounts {
    /// Amount debited from the sender (and from the allowance)
    pub gross: U256,
    /// Amount removed from circulation
    pub burned: U256,
    /// Amount credited to the recipient
    pub net: U256,
}

impl TransferAmounts {
    pub fn compute(policy: &BurnPolicy, gross: U256) -> TokenResult<Self> {
        let burned = policy.burn_amount(gross);
        let net = gross.checked_sub(burned).ok_or(TokenError::Underflow)?;
        Ok(Self { gross, burned, net })
    }

    /// Amounts for a move that never burns
    pub fn without_burn(gross: U256) -> Self {
        Self {
            gross,
            burned: U256::zero(),
            net: gross,
        }
    }
}
