//! YAML scenario execution engine
//!
//! This module executes parsed YAML test scenarios against a freshly
//! deployed `Ledger`, providing a high-level DSL for integration testing.
//!
//! # Example
//!
//! ```rust,ignore
//! use legacy_testing_framework::scenarios::{ScenarioExecutor, parse_scenario};
//!
//! let yaml = r#"
//! name: "Simple Transfer"
//! deployer: "owner"
//! steps:
//!   - action: "send"
//!     to: "alice"
//!     amount: "100"
//!   - action: "transfer"
//!     from: "alice"
//!     to: "bob"
//!     amount: "40"
//!   - action: "assert_balance"
//!     account: "alice"
//!     eq: "60"
//! "#;
//!
//! let scenario = parse_scenario(yaml)?;
//! let mut executor = ScenarioExecutor::new();
//! let report = executor.execute(scenario)?;
//!
//! assert!(report.success);
//! ```

use super::parser::{Amount, Step, TestScenario};
use super::{CONTRACT_ACCOUNT, ZERO_ACCOUNT};
use crate::invariants::{check_named, check_state_unchanged};
use anyhow::{Context, Result};
use legacy_common::crypto::{hash, Address};
use legacy_common::token::{Ledger, TokenError, TokenResult};
use legacy_common::U256;
use log::debug;
use std::collections::HashMap;

/// Scenario executor that runs parsed YAML scenarios
pub struct ScenarioExecutor {
    /// Ledger under test
    ledger: Option<Ledger>,

    /// Deployer account name, the default caller of owner-gated steps
    deployer: String,

    /// Token decimals, used to scale amounts
    decimals: u8,

    /// Named accounts (name → address)
    accounts: HashMap<String, Address>,

    /// Execution log
    log: Vec<String>,

    /// Current step number (1-indexed)
    current_step: usize,
}

impl ScenarioExecutor {
    /// Create new executor
    pub fn new() -> Self {
        Self {
            ledger: None,
            deployer: String::new(),
            decimals: 0,
            accounts: HashMap::new(),
            log: Vec::new(),
            current_step: 0,
        }
    }

    /// Execute a complete scenario
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Deployment fails
    /// - A step fails unexpectedly, or succeeds when a failure was expected
    /// - Any assertion or invariant fails
    pub fn execute(&mut self, scenario: TestScenario) -> Result<ExecutionReport> {
        self.log.clear();
        self.accounts.clear();
        self.current_step = 0;

        self.log(format!("Starting scenario: {}", scenario.name));
        if let Some(desc) = &scenario.description {
            self.log(format!("Description: {}", desc));
        }

        self.deploy(&scenario)?;

        for (idx, step) in scenario.steps.iter().enumerate() {
            self.current_step = idx + 1;
            self.log(format!("\n--- Step {}: {:?} ---", self.current_step, step));

            self.execute_step(step)
                .with_context(|| format!("Failed at step {} ({:?})", self.current_step, step))?;
        }

        if let Some(invariants) = &scenario.invariants {
            self.log("\n--- Checking Invariants ---".to_string());
            for inv in invariants {
                check_named(inv, self.ledger()?.state())
                    .with_context(|| format!("Invariant '{}' failed", inv))?;
                self.log(format!("  ✓ {}", inv));
            }
        }

        self.log("\n=== Scenario completed successfully ===".to_string());

        Ok(ExecutionReport {
            scenario_name: scenario.name,
            steps_executed: self.current_step,
            success: true,
            log: self.log.clone(),
        })
    }

    /// Deploy the ledger for a scenario
    fn deploy(&mut self, scenario: &TestScenario) -> Result<()> {
        self.log("Deploying ledger...".to_string());

        self.deployer = scenario.deployer.clone();
        self.decimals = scenario.ledger.decimals;
        let deployer = self.get_or_create_account(&scenario.deployer);

        let ledger = Ledger::new(&scenario.ledger, deployer).context("Deployment failed")?;
        self.log(format!(
            "  {} ({}) at {}, supply {}",
            ledger.name(),
            ledger.symbol(),
            ledger.contract_address(),
            ledger.total_supply()
        ));
        self.ledger = Some(ledger);
        Ok(())
    }

    /// Execute a single step
    fn execute_step(&mut self, step: &Step) -> Result<()> {
        let expect = step.expect_error();

        match step {
            Step::Mint { caller, amount, .. } => {
                let caller = self.caller(caller)?;
                let amount = self.raw(amount)?;
                self.run_call("mint", expect, |ledger| ledger.mint(&caller, amount))
            }
            Step::Send {
                caller, to, amount, ..
            } => {
                let caller = self.caller(caller)?;
                let to = self.resolve(to)?;
                let amount = self.raw(amount)?;
                self.run_call("send", expect, |ledger| ledger.send(&caller, &to, amount))
            }
            Step::Transfer {
                from, to, amount, ..
            } => {
                let from = self.resolve(from)?;
                let to = self.resolve(to)?;
                let amount = self.raw(amount)?;
                self.run_call("transfer", expect, |ledger| {
                    ledger.transfer(&from, &to, amount)
                })
            }
            Step::TransferFrom {
                spender,
                from,
                to,
                amount,
                ..
            } => {
                let spender = self.resolve(spender)?;
                let from = self.resolve(from)?;
                let to = self.resolve(to)?;
                let amount = self.raw(amount)?;
                self.run_call("transfer_from", expect, |ledger| {
                    ledger.transfer_from(&spender, &from, &to, amount)
                })
            }
            Step::Approve {
                owner,
                spender,
                amount,
                ..
            } => {
                let owner = self.resolve(owner)?;
                let spender = self.resolve(spender)?;
                let amount = self.raw(amount)?;
                self.run_call("approve", expect, |ledger| {
                    ledger.approve(&owner, &spender, amount)
                })
            }
            Step::Pause { caller, .. } => {
                let caller = self.caller(caller)?;
                self.run_call("pause", expect, |ledger| ledger.pause(&caller))
            }
            Step::Unpause { caller, .. } => {
                let caller = self.caller(caller)?;
                self.run_call("unpause", expect, |ledger| ledger.unpause(&caller))
            }
            Step::EnableBurn { caller, .. } => {
                let caller = self.caller(caller)?;
                self.run_call("enable_burn", expect, |ledger| {
                    ledger.enable_transfer_with_burn(&caller)
                })
            }
            Step::DisableBurn { caller, .. } => {
                let caller = self.caller(caller)?;
                self.run_call("disable_burn", expect, |ledger| {
                    ledger.disable_transfer_with_burn(&caller)
                })
            }
            Step::SetBurnRate { caller, rate, .. } => {
                let caller = self.caller(caller)?;
                let rate = *rate;
                self.run_call("set_burn_rate", expect, |ledger| {
                    ledger.set_burn_rate(&caller, rate)
                })
            }
            Step::TransferOwnership {
                caller, new_owner, ..
            } => {
                let caller = self.caller(caller)?;
                let new_owner = self.resolve(new_owner)?;
                self.run_call("transfer_ownership", expect, |ledger| {
                    ledger.transfer_ownership(&caller, &new_owner)
                })
            }
            Step::AssertBalance { account, eq } => {
                let addr = self.resolve(account)?;
                let expected = self.raw(eq)?;
                let actual = self.ledger()?.balance_of(&addr);
                self.assert_amount(&format!("balance of '{}'", account), expected, actual)
            }
            Step::AssertTotalSupply { eq } => {
                let expected = self.raw(eq)?;
                let actual = self.ledger()?.total_supply();
                self.assert_amount("total supply", expected, actual)
            }
            Step::AssertAllowance { owner, spender, eq } => {
                let owner_addr = self.resolve(owner)?;
                let spender_addr = self.resolve(spender)?;
                let expected = self.raw(eq)?;
                let actual = self.ledger()?.allowance(&owner_addr, &spender_addr);
                self.assert_amount(
                    &format!("allowance '{}' -> '{}'", owner, spender),
                    expected,
                    actual,
                )
            }
            Step::AssertPaused { eq } => {
                let actual = self.ledger()?.paused();
                anyhow::ensure!(
                    actual == *eq,
                    "Pause assertion failed: expected {}, got {}",
                    eq,
                    actual
                );
                self.log(format!("  ✓ Paused equals {}", eq));
                Ok(())
            }
            Step::AssertBurnRate { eq, enabled } => {
                let ledger = self.ledger()?;
                let rate = ledger.burn_rate();
                let actual_enabled = ledger.is_transfer_with_burn_enabled();

                anyhow::ensure!(
                    rate == *eq,
                    "Burn rate assertion failed: expected {}, got {}",
                    eq,
                    rate
                );
                if let Some(enabled) = enabled {
                    anyhow::ensure!(
                        actual_enabled == *enabled,
                        "Burn flag assertion failed: expected {}, got {}",
                        enabled,
                        actual_enabled
                    );
                }
                self.log(format!("  ✓ Burn rate equals {}", eq));
                Ok(())
            }
        }
    }

    /// Run a mutating call and check it against the expected outcome
    ///
    /// A call expected to fail must fail with exactly that error and leave
    /// the ledger state untouched.
    fn run_call<F>(&mut self, label: &str, expect: Option<&str>, call: F) -> Result<()>
    where
        F: FnOnce(&mut Ledger) -> TokenResult<()>,
    {
        let ledger = self.ledger.as_mut().context("Ledger not deployed")?;
        let snapshot = ledger.state().clone();
        let result = call(ledger);

        let outcome = match (expect, result) {
            (None, Ok(())) => format!("  ✓ {} succeeded", label),
            (None, Err(e)) => anyhow::bail!("{} failed: {:?} ({})", label, e, e),
            (Some(name), Ok(())) => {
                anyhow::bail!("Expected {} to fail with {}, but it succeeded", label, name)
            }
            (Some(name), Err(e)) => {
                let expected = TokenError::from_name(name)
                    .with_context(|| format!("Unknown error name: {}", name))?;
                anyhow::ensure!(
                    e == expected,
                    "{} failed with {:?}, expected {:?}",
                    label,
                    e,
                    expected
                );
                check_state_unchanged(&snapshot, ledger.state())
                    .with_context(|| format!("Rejected {} mutated the ledger", label))?;
                format!("  ✓ {} failed as expected ({:?})", label, e)
            }
        };

        debug!("step {}: {}", self.current_step, outcome.trim_start());
        self.log(outcome);
        Ok(())
    }

    fn assert_amount(&mut self, what: &str, expected: U256, actual: U256) -> Result<()> {
        self.log(format!("Assert {}: actual={}", what, actual));
        anyhow::ensure!(
            actual == expected,
            "Assertion on {} failed: expected {}, got {}",
            what,
            expected,
            actual
        );
        self.log(format!("  ✓ Equals {}", expected));
        Ok(())
    }

    fn ledger(&self) -> Result<&Ledger> {
        self.ledger.as_ref().context("Ledger not deployed")
    }

    /// Scale an amount with the deployed token's decimals
    fn raw(&self, amount: &Amount) -> Result<U256> {
        amount
            .to_raw(self.decimals)
            .with_context(|| format!("Invalid amount {}", amount))
    }

    /// Resolve an optional caller, defaulting to the deployer
    fn caller(&mut self, caller: &Option<String>) -> Result<Address> {
        let name = caller.clone().unwrap_or_else(|| self.deployer.clone());
        self.resolve(&name)
    }

    /// Resolve an account name, including the reserved names
    fn resolve(&mut self, name: &str) -> Result<Address> {
        match name {
            CONTRACT_ACCOUNT => Ok(self.ledger()?.contract_address()),
            ZERO_ACCOUNT => Ok(Address::zero()),
            _ => Ok(self.get_or_create_account(name)),
        }
    }

    /// Get or create account address
    fn get_or_create_account(&mut self, name: &str) -> Address {
        *self
            .accounts
            .entry(name.to_string())
            .or_insert_with(|| Self::create_account_address(name))
    }

    /// Create deterministic account address from name
    fn create_account_address(name: &str) -> Address {
        Address::new(hash(name.as_bytes()))
    }

    /// Address assigned to a named account, if it was used
    pub fn account(&self, name: &str) -> Option<Address> {
        self.accounts.get(name).copied()
    }

    /// Add log entry
    fn log(&mut self, message: String) {
        self.log.push(message);
    }

    /// Get execution log
    pub fn get_log(&self) -> &[String] {
        &self.log
    }
}

impl Default for ScenarioExecutor {
    fn default() -> Self {
        Self::new()
    }
}

/// Execution report
#[derive(Debug, Clone)]
pub struct ExecutionReport {
    /// Scenario name
    pub scenario_name: String,

    /// Number of steps executed
    pub steps_executed: usize,

    /// Whether execution succeeded
    pub success: bool,

    /// Execution log
    pub log: Vec<String>,
}

impl ExecutionReport {
    /// Print report to stdout
    pub fn print(&self) {
        println!("\n=== Scenario Execution Report ===");
        println!("Name:   {}", self.scenario_name);
        println!("Steps:  {}", self.steps_executed);
        println!(
            "Status: {}",
            if self.success { "SUCCESS ✓" } else { "FAILED ✗" }
        );

        println!("\nExecution Log:");
        for entry in &self.log {
            println!("{}", entry);
        }
    }
}
