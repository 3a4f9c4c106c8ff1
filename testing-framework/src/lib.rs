//! # Gods Legacy Testing Framework
//!
//! Deterministic test tooling for the token ledger.
//!
//! ## Components
//!
//! - **invariants**: checks that must hold on every reachable ledger state
//!   (balance conservation, unchanged state after a rejected call)
//! - **scenarios**: a YAML DSL describing a sequence of ledger calls and
//!   assertions, plus the executor that runs it
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use legacy_testing_framework::scenarios::{parse_scenario, ScenarioExecutor};
//!
//! let scenario = parse_scenario(include_str!("../scenarios/burn_on_transfer.yaml"))?;
//! let report = ScenarioExecutor::new().execute(scenario)?;
//! assert!(report.success);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core invariant checkers (balance conservation, state snapshots)
pub mod invariants;

// DSL scenario parser and executor
pub mod scenarios;

/// Framework version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
