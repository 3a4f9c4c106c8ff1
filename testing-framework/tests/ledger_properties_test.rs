#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
//! Ledger property tests
//!
//! Covers:
//! - Conservation of balances under random call sequences
//! - Pause gate on transfer-family calls
//! - Owner-only enforcement
//! - Burn rate bound and burn arithmetic
//! - Gross allowance debit

use legacy_common::config::{initial_supply, COIN_VALUE};
use legacy_common::crypto::Address;
use legacy_common::token::{Ledger, TokenError};
use legacy_common::U256;
use legacy_testing_framework::invariants::{
    check_balance_conservation, check_owner_present, check_state_unchanged,
};
use proptest::prelude::*;

const OWNER: Address = Address::new([0x10; 32]);
const ADDR1: Address = Address::new([0x11; 32]);
const ADDR2: Address = Address::new([0x12; 32]);
const ADDR3: Address = Address::new([0x13; 32]);

fn coins(n: u64) -> U256 {
    U256::from(n) * COIN_VALUE
}

fn deploy() -> Ledger {
    let _ = env_logger::builder().is_test(true).try_init();
    Ledger::with_defaults(OWNER).unwrap()
}

// ============================================================================
// Literal scenarios
// ============================================================================

#[test]
fn test_burn_scenario_with_fixed_point_units() {
    let mut ledger = deploy();

    ledger.mint(&OWNER, coins(100)).unwrap();
    assert_eq!(ledger.total_supply(), initial_supply() + coins(100));

    ledger.send(&OWNER, &ADDR1, coins(1000)).unwrap();
    assert_eq!(ledger.balance_of(&ADDR1), coins(1000));

    ledger.set_burn_rate(&OWNER, 5).unwrap();
    ledger.enable_transfer_with_burn(&OWNER).unwrap();

    ledger.transfer(&ADDR1, &ADDR2, coins(50)).unwrap();

    // 50e18 * 5 / 1000 = 0.25e18
    assert_eq!(ledger.balance_of(&ADDR2), U256::from(4975u64) * COIN_VALUE / 100);
    assert_eq!(ledger.balance_of(&ADDR1), coins(950));
    assert_eq!(
        ledger.total_supply(),
        initial_supply() + coins(100) - COIN_VALUE / 4
    );
    check_balance_conservation(ledger.state()).unwrap();
}

#[test]
fn test_burn_scenario_with_small_units_truncates() {
    let mut ledger = deploy();
    ledger.send(&OWNER, &ADDR1, U256::from(1000u64)).unwrap();
    ledger.set_burn_rate(&OWNER, 5).unwrap();
    ledger.enable_transfer_with_burn(&OWNER).unwrap();

    // floor(50 * 5 / 1000) = 0
    ledger.transfer(&ADDR1, &ADDR2, U256::from(50u64)).unwrap();
    assert_eq!(ledger.balance_of(&ADDR2), U256::from(50u64));
    assert_eq!(ledger.total_supply(), initial_supply());
}

#[test]
fn test_paused_transfers_leave_state_identical() {
    let mut ledger = deploy();
    ledger.send(&OWNER, &ADDR1, coins(10)).unwrap();
    ledger.approve(&ADDR1, &ADDR2, coins(10)).unwrap();
    ledger.pause(&OWNER).unwrap();

    let before = ledger.state().clone();

    assert_eq!(
        ledger.transfer(&ADDR1, &ADDR2, coins(1)),
        Err(TokenError::ContractPaused)
    );
    assert_eq!(
        ledger.transfer_from(&ADDR2, &ADDR1, &ADDR3, coins(1)),
        Err(TokenError::ContractPaused)
    );
    check_state_unchanged(&before, ledger.state()).unwrap();
}

#[test]
fn test_non_owner_pause_keeps_prior_value() {
    let mut ledger = deploy();

    assert_eq!(ledger.pause(&ADDR1), Err(TokenError::Unauthorized));
    assert!(!ledger.paused());

    ledger.pause(&OWNER).unwrap();
    assert_eq!(ledger.unpause(&ADDR1), Err(TokenError::Unauthorized));
    assert!(ledger.paused());
}

#[test]
fn test_owner_only_calls_mutate_nothing() {
    let mut ledger = deploy();
    let before = ledger.state().clone();

    let results = [
        ledger.pause(&ADDR1),
        ledger.unpause(&ADDR1),
        ledger.enable_transfer_with_burn(&ADDR1),
        ledger.disable_transfer_with_burn(&ADDR1),
        ledger.set_burn_rate(&ADDR1, 1),
        ledger.mint(&ADDR1, coins(1)),
        ledger.send(&ADDR1, &ADDR1, coins(1)),
        ledger.transfer_ownership(&ADDR1, &ADDR1),
    ];

    for result in results {
        assert_eq!(result, Err(TokenError::Unauthorized));
    }
    check_state_unchanged(&before, ledger.state()).unwrap();
    check_owner_present(ledger.state()).unwrap();
}

// ============================================================================
// Properties
// ============================================================================

#[derive(Debug, Clone)]
enum Call {
    Mint(u64),
    Send(usize, u64),
    Transfer(usize, usize, u64),
    Approve(usize, usize, u64),
    TransferFrom(usize, usize, usize, u64),
    SetBurnRate(u64),
    ToggleBurn(bool),
    TogglePause(bool),
}

const HOLDERS: [Address; 3] = [ADDR1, ADDR2, ADDR3];

fn call_strategy() -> impl Strategy<Value = Call> {
    prop_oneof![
        (0u64..1_000_000).prop_map(Call::Mint),
        (0usize..3, 0u64..1_000_000).prop_map(|(to, a)| Call::Send(to, a)),
        (0usize..3, 0usize..3, 0u64..1_000_000).prop_map(|(f, t, a)| Call::Transfer(f, t, a)),
        (0usize..3, 0usize..3, 0u64..1_000_000).prop_map(|(o, s, a)| Call::Approve(o, s, a)),
        (0usize..3, 0usize..3, 0usize..3, 0u64..1_000_000)
            .prop_map(|(s, f, t, a)| Call::TransferFrom(s, f, t, a)),
        (0u64..1200).prop_map(Call::SetBurnRate),
        any::<bool>().prop_map(Call::ToggleBurn),
        any::<bool>().prop_map(Call::TogglePause),
    ]
}

fn apply(ledger: &mut Ledger, call: &Call) -> Result<(), TokenError> {
    match *call {
        Call::Mint(a) => ledger.mint(&OWNER, U256::from(a)),
        Call::Send(to, a) => ledger.send(&OWNER, &HOLDERS[to], U256::from(a)),
        Call::Transfer(f, t, a) => ledger.transfer(&HOLDERS[f], &HOLDERS[t], U256::from(a)),
        Call::Approve(o, s, a) => ledger.approve(&HOLDERS[o], &HOLDERS[s], U256::from(a)),
        Call::TransferFrom(s, f, t, a) => {
            ledger.transfer_from(&HOLDERS[s], &HOLDERS[f], &HOLDERS[t], U256::from(a))
        }
        Call::SetBurnRate(r) => ledger.set_burn_rate(&OWNER, r),
        Call::ToggleBurn(true) => ledger.enable_transfer_with_burn(&OWNER),
        Call::ToggleBurn(false) => ledger.disable_transfer_with_burn(&OWNER),
        Call::TogglePause(true) => ledger.pause(&OWNER),
        Call::TogglePause(false) => ledger.unpause(&OWNER),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_balance_conservation(calls in prop::collection::vec(call_strategy(), 1..60)) {
        let mut ledger = deploy();

        for call in &calls {
            let before = ledger.state().clone();
            if apply(&mut ledger, call).is_err() {
                prop_assert!(check_state_unchanged(&before, ledger.state()).is_ok());
            }
            prop_assert!(check_balance_conservation(ledger.state()).is_ok());
        }
    }

    #[test]
    fn prop_burn_arithmetic(amount in 0u64..u64::MAX, rate in 0u64..=1000) {
        let mut ledger = deploy();
        ledger.send(&OWNER, &ADDR1, U256::from(amount)).unwrap();
        ledger.set_burn_rate(&OWNER, rate).unwrap();
        ledger.enable_transfer_with_burn(&OWNER).unwrap();

        ledger.transfer(&ADDR1, &ADDR2, U256::from(amount)).unwrap();

        let burn = U256::from(amount) * U256::from(rate) / U256::from(1000u64);
        prop_assert_eq!(ledger.balance_of(&ADDR1), U256::zero());
        prop_assert_eq!(ledger.balance_of(&ADDR2), U256::from(amount) - burn);
        prop_assert_eq!(ledger.total_supply(), initial_supply() - burn);
    }

    #[test]
    fn prop_no_burn_when_disabled(amount in 0u64..u64::MAX, rate in 0u64..=1000) {
        let mut ledger = deploy();
        ledger.send(&OWNER, &ADDR1, U256::from(amount)).unwrap();
        ledger.set_burn_rate(&OWNER, rate).unwrap();

        ledger.transfer(&ADDR1, &ADDR2, U256::from(amount)).unwrap();
        prop_assert_eq!(ledger.balance_of(&ADDR2), U256::from(amount));
        prop_assert_eq!(ledger.total_supply(), initial_supply());
    }

    #[test]
    fn prop_burn_rate_bound(rate in 0u64..5000) {
        let mut ledger = deploy();
        ledger.set_burn_rate(&OWNER, 42).unwrap();

        let result = ledger.set_burn_rate(&OWNER, rate);
        if rate <= 1000 {
            prop_assert!(result.is_ok());
            prop_assert_eq!(ledger.burn_rate(), rate);
        } else {
            prop_assert_eq!(result, Err(TokenError::InvalidBurnRate));
            prop_assert_eq!(ledger.burn_rate(), 42);
        }
    }

    #[test]
    fn prop_allowance_debited_gross(amount in 1u64..1_000_000, rate in 0u64..=1000) {
        let mut ledger = deploy();
        ledger.send(&OWNER, &ADDR1, U256::from(amount)).unwrap();
        ledger.approve(&ADDR1, &ADDR2, U256::from(amount * 2)).unwrap();
        ledger.set_burn_rate(&OWNER, rate).unwrap();
        ledger.enable_transfer_with_burn(&OWNER).unwrap();

        ledger.transfer_from(&ADDR2, &ADDR1, &ADDR3, U256::from(amount)).unwrap();
        prop_assert_eq!(ledger.allowance(&ADDR1, &ADDR2), U256::from(amount));
    }
}
