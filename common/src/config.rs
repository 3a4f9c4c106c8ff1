use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::token::{TokenError, TokenResult};

// 18 decimals numbers
pub const COIN_DECIMALS: u8 = 18;
// 1 000 000 000 000 000 000 to represent 1 whole token
pub const COIN_VALUE: U256 = U256([10u64.pow(COIN_DECIMALS as u32), 0, 0, 0]);
// One billion whole tokens credited to the ledger's own account at deployment
pub const INITIAL_SUPPLY_UNITS: u64 = 1_000_000_000;

// Burn rates are expressed per mille: a rate of 5 burns 0.5% of each transfer
pub const BURN_RATE_DENOMINATOR: u64 = 1000;
// A rate equal to the denominator burns the whole transfer
pub const MAX_BURN_RATE: u64 = BURN_RATE_DENOMINATOR;

// ===== Metadata limits =====

/// Maximum length of the token name (bytes)
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum length of the token symbol (bytes)
pub const MAX_SYMBOL_LENGTH: usize = 12;

/// Maximum decimals for the token
pub const MAX_DECIMALS: u8 = 18;

pub const DEFAULT_TOKEN_NAME: &str = "Gods Legacy";
pub const DEFAULT_TOKEN_SYMBOL: &str = "GODS";

/// Raw amount of the default initial supply
pub fn initial_supply() -> U256 {
    U256::from(INITIAL_SUPPLY_UNITS) * COIN_VALUE
}

/// Settings used once, when the ledger is deployed
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Token name
    pub name: String,
    /// Token symbol/ticker
    pub symbol: String,
    /// Decimal places (0-18)
    pub decimals: u8,
    /// Initial supply in whole tokens, scaled by `10^decimals` at deployment
    pub initial_supply: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_TOKEN_NAME.to_string(),
            symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
            decimals: COIN_DECIMALS,
            initial_supply: INITIAL_SUPPLY_UNITS,
        }
    }
}

impl LedgerConfig {
    /// Parse a configuration from JSON, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> TokenResult<()> {
        if self.name.is_empty() {
            return Err(TokenError::NameEmpty);
        }
        if self.name.len() > MAX_NAME_LENGTH {
            return Err(TokenError::NameTooLong);
        }
        if self.symbol.is_empty() {
            return Err(TokenError::SymbolEmpty);
        }
        if self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(TokenError::SymbolTooLong);
        }
        if !self
            .symbol
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(TokenError::SymbolInvalid);
        }
        if self.decimals > MAX_DECIMALS {
            return Err(TokenError::DecimalsTooHigh);
        }
        self.scaled_initial_supply().map(|_| ())
    }

    /// One whole token expressed in raw units
    pub fn unit(&self) -> U256 {
        U256::exp10(self.decimals as usize)
    }

    /// Initial supply expressed in raw units
    pub fn scaled_initial_supply(&self) -> TokenResult<U256> {
        U256::from(self.initial_supply)
            .checked_mul(self.unit())
            .ok_or(TokenError::Overflow)
    }
}
