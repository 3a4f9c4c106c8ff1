//! DSL scenario parser and executor
//!
//! Parses YAML scenario files describing ledger calls:
//! - Named accounts, created on first use
//! - `expect_error` on mutating steps (the call must fail with that error
//!   and leave the ledger untouched)
//! - Amounts as strings (`"1000"`, `"49.75"`, `"raw:100"`)
//!
//! ## Example Scenario
//!
//! ```yaml
//! name: "Pause blocks transfers"
//! deployer: "owner"
//! steps:
//!   - action: "send"
//!     to: "alice"
//!     amount: "10"
//!   - action: "pause"
//!   - action: "transfer"
//!     from: "alice"
//!     to: "bob"
//!     amount: "1"
//!     expect_error: "ContractPaused"
//!   - action: "assert_balance"
//!     account: "alice"
//!     eq: "10"
//! invariants:
//!   - "balance_conservation"
//! ```

pub mod executor;
pub mod parser;

pub use executor::{ExecutionReport, ScenarioExecutor};
pub use parser::{parse_scenario, Amount, Step, TestScenario};

/// Account name resolving to the ledger's own account
pub const CONTRACT_ACCOUNT: &str = "contract";

/// Account name resolving to the zero address
pub const ZERO_ACCOUNT: &str = "zero";
