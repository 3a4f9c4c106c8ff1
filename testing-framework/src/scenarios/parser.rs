//! YAML scenario parser
//!
//! - Amounts are strings in whole tokens, with an optional fraction
//!   (`"49.75"`), or raw base units with a `raw:` prefix (`"raw:100"`)
//! - Every mutating step takes an optional `expect_error` naming the
//!   expected `TokenError` variant
//! - `contract` names the ledger's own account and `zero` the null address
//!
//! ## Example Scenario
//!
//! ```yaml
//! name: "Burn on transfer"
//! deployer: "owner"
//! steps:
//!   - action: "send"
//!     to: "addr1"
//!     amount: "1000"
//!   - action: "set_burn_rate"
//!     rate: 5
//!   - action: "enable_burn"
//!   - action: "transfer"
//!     from: "addr1"
//!     to: "addr2"
//!     amount: "50"
//!   - action: "assert_balance"
//!     account: "addr2"
//!     eq: "49.75"
//! invariants:
//!   - "balance_conservation"
//! ```

use legacy_common::config::LedgerConfig;
use legacy_common::token::TokenError;
use legacy_common::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{CONTRACT_ACCOUNT, ZERO_ACCOUNT};
use crate::invariants::KNOWN_INVARIANTS;

/// Complete test scenario loaded from YAML
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TestScenario {
    /// Scenario name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Deployment settings, defaults apply to missing fields
    #[serde(default)]
    pub ledger: LedgerConfig,

    /// Account that deploys (and initially owns) the ledger
    pub deployer: String,

    /// Execution steps
    pub steps: Vec<Step>,

    /// Invariants to check after execution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invariants: Option<Vec<String>>,
}

/// Test execution step
///
/// `caller` defaults to the deployer on owner-gated steps.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Issue new supply to the contract account
    Mint {
        /// Calling account
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caller: Option<String>,
        /// Amount to issue
        amount: Amount,
        /// Expected failure
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expect_error: Option<String>,
    },

    /// Pay out from the contract account
    Send {
        /// Calling account
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caller: Option<String>,
        /// Recipient account name
        to: String,
        /// Amount to pay out
        amount: Amount,
        /// Expected failure
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expect_error: Option<String>,
    },

    /// Holder-initiated transfer
    Transfer {
        /// Sender account name (also the caller)
        from: String,
        /// Recipient account name
        to: String,
        /// Gross amount
        amount: Amount,
        /// Expected failure
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expect_error: Option<String>,
    },

    /// Spender-initiated transfer
    TransferFrom {
        /// Calling account, spending its allowance
        spender: String,
        /// Account debited
        from: String,
        /// Recipient account name
        to: String,
        /// Gross amount
        amount: Amount,
        /// Expected failure
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expect_error: Option<String>,
    },

    /// Set an allowance
    Approve {
        /// Account granting the allowance (also the caller)
        owner: String,
        /// Account allowed to spend
        spender: String,
        /// New allowance
        amount: Amount,
        /// Expected failure
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expect_error: Option<String>,
    },

    /// Close the pause gate
    Pause {
        /// Calling account
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caller: Option<String>,
        /// Expected failure
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expect_error: Option<String>,
    },

    /// Open the pause gate
    Unpause {
        /// Calling account
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caller: Option<String>,
        /// Expected failure
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expect_error: Option<String>,
    },

    /// Turn burn-on-transfer on
    EnableBurn {
        /// Calling account
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caller: Option<String>,
        /// Expected failure
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expect_error: Option<String>,
    },

    /// Turn burn-on-transfer off
    DisableBurn {
        /// Calling account
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caller: Option<String>,
        /// Expected failure
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expect_error: Option<String>,
    },

    /// Change the per-mille burn rate
    SetBurnRate {
        /// Calling account
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caller: Option<String>,
        /// New rate
        rate: u64,
        /// Expected failure
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expect_error: Option<String>,
    },

    /// Hand the ledger to another account
    TransferOwnership {
        /// Calling account
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caller: Option<String>,
        /// New owner account name
        new_owner: String,
        /// Expected failure
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expect_error: Option<String>,
    },

    /// Assert an account balance
    AssertBalance {
        /// Account name to check
        account: String,
        /// Expected balance
        eq: Amount,
    },

    /// Assert the total supply
    AssertTotalSupply {
        /// Expected supply
        eq: Amount,
    },

    /// Assert an allowance
    AssertAllowance {
        /// Account that granted the allowance
        owner: String,
        /// Account allowed to spend
        spender: String,
        /// Expected allowance
        eq: Amount,
    },

    /// Assert the pause state
    AssertPaused {
        /// Expected pause state
        eq: bool,
    },

    /// Assert the burn policy
    AssertBurnRate {
        /// Expected per-mille rate
        eq: u64,
        /// Expected enable flag, unchecked if absent
        #[serde(default, skip_serializing_if = "Option::is_none")]
        enabled: Option<bool>,
    },
}

impl Step {
    /// Expected failure declared on a mutating step
    pub fn expect_error(&self) -> Option<&str> {
        match self {
            Step::Mint { expect_error, .. }
            | Step::Send { expect_error, .. }
            | Step::Transfer { expect_error, .. }
            | Step::TransferFrom { expect_error, .. }
            | Step::Approve { expect_error, .. }
            | Step::Pause { expect_error, .. }
            | Step::Unpause { expect_error, .. }
            | Step::EnableBurn { expect_error, .. }
            | Step::DisableBurn { expect_error, .. }
            | Step::SetBurnRate { expect_error, .. }
            | Step::TransferOwnership { expect_error, .. } => expect_error.as_deref(),
            _ => None,
        }
    }
}

// ===== Amounts =====

/// Error raised for malformed amount strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Text is not a decimal number
    #[error("invalid amount: {0}")]
    Invalid(String),

    /// More fractional digits than the token has decimals
    #[error("amount {amount} has more than {decimals} decimals")]
    TooPrecise {
        /// Amount as written
        amount: String,
        /// Token decimals
        decimals: u8,
    },

    /// Value does not fit in 256 bits
    #[error("amount {0} overflows")]
    Overflow(String),
}

/// Amount as written in a scenario
///
/// Whole-token amounts are scaled once the token decimals are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Amount {
    /// Raw base units
    Raw(U256),
    /// Whole tokens, with an optional fractional part
    Tokens {
        /// Integer part
        whole: U256,
        /// Fractional digits as written (no trailing padding)
        fraction: String,
    },
}

impl Amount {
    /// Convert to raw base units for a token with `decimals` decimals
    pub fn to_raw(&self, decimals: u8) -> Result<U256, AmountError> {
        match self {
            Amount::Raw(value) => Ok(*value),
            Amount::Tokens { whole, fraction } => {
                if fraction.len() > decimals as usize {
                    return Err(AmountError::TooPrecise {
                        amount: self.to_string(),
                        decimals,
                    });
                }

                let overflow = || AmountError::Overflow(self.to_string());
                let unit = U256::exp10(decimals as usize);
                let mut raw = whole.checked_mul(unit).ok_or_else(overflow)?;

                if !fraction.is_empty() {
                    let digits = U256::from_dec_str(fraction)
                        .map_err(|_| AmountError::Invalid(self.to_string()))?;
                    let scale = U256::exp10(decimals as usize - fraction.len());
                    raw = raw
                        .checked_add(digits.checked_mul(scale).ok_or_else(overflow)?)
                        .ok_or_else(overflow)?;
                }
                Ok(raw)
            }
        }
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || AmountError::Invalid(value.to_string());
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

        if let Some(raw) = value.strip_prefix("raw:") {
            if !is_digits(raw) {
                return Err(invalid());
            }
            let raw = U256::from_dec_str(raw).map_err(|_| AmountError::Overflow(value.to_string()))?;
            return Ok(Amount::Raw(raw));
        }

        let (whole, fraction) = match value.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (value, ""),
        };
        if !is_digits(whole) || (value.contains('.') && !is_digits(fraction)) {
            return Err(invalid());
        }

        let whole = U256::from_dec_str(whole).map_err(|_| AmountError::Overflow(value.to_string()))?;
        Ok(Amount::Tokens {
            whole,
            fraction: fraction.trim_end_matches('0').to_string(),
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Raw(value) => write!(f, "raw:{}", value),
            Amount::Tokens { whole, fraction } if fraction.is_empty() => write!(f, "{}", whole),
            Amount::Tokens { whole, fraction } => write!(f, "{}.{}", whole, fraction),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Accepts amounts as strings or plain numbers
///
/// This allows YAML to use either format:
/// - `amount: 1000` (number, whole tokens)
/// - `amount: "49.75"` (string)
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct AmountVisitor;

        impl<'de> Visitor<'de> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an amount as number or string")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Amount::Tokens {
                    whole: U256::from(value),
                    fraction: String::new(),
                })
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if value < 0 {
                    return Err(de::Error::custom(format!(
                        "negative value not allowed: {}",
                        value
                    )));
                }
                self.visit_u64(value as u64)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse::<Amount>().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}

// ===== Parsing =====

/// Parse YAML scenario file
pub fn parse_scenario(yaml: &str) -> anyhow::Result<TestScenario> {
    let scenario: TestScenario = serde_yaml::from_str(yaml)
        .map_err(|e| anyhow::anyhow!("Failed to parse YAML scenario: {}", e))?;

    // Validate scenario
    validate_scenario(&scenario)?;

    Ok(scenario)
}

/// Validate scenario structure
fn validate_scenario(scenario: &TestScenario) -> anyhow::Result<()> {
    anyhow::ensure!(!scenario.name.is_empty(), "Scenario name cannot be empty");

    anyhow::ensure!(
        !scenario.deployer.is_empty(),
        "Deployer name cannot be empty"
    );
    anyhow::ensure!(
        scenario.deployer != CONTRACT_ACCOUNT && scenario.deployer != ZERO_ACCOUNT,
        "Deployer cannot be the reserved account '{}'",
        scenario.deployer
    );

    anyhow::ensure!(
        !scenario.steps.is_empty(),
        "Scenario must have at least one step"
    );

    for (idx, step) in scenario.steps.iter().enumerate() {
        if let Some(name) = step.expect_error() {
            anyhow::ensure!(
                TokenError::from_name(name).is_some(),
                "Step {}: unknown error '{}'",
                idx + 1,
                name
            );
        }
    }

    if let Some(invariants) = &scenario.invariants {
        for name in invariants {
            anyhow::ensure!(
                KNOWN_INVARIANTS.contains(&name.as_str()),
                "Unknown invariant: {}",
                name
            );
        }
    }

    Ok(())
}
