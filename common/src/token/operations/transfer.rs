// Token Transfer Operations
//
// transfer and transfer_from share one move routine: the sender is debited
// the gross amount, the recipient is credited the net amount and the burned
// part leaves the total supply.

use log::debug;
use primitive_types::U256;

use super::pause::require_not_paused;
use super::validation::validate_recipient;
use super::{RuntimeContext, TokenStorage};
use crate::crypto::Address;
use crate::token::{TokenError, TokenEvent, TokenResult, TransferAmounts};

/// Post-move values, computed before anything is written
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MovePlan {
    new_from: U256,
    new_to: U256,
    new_supply: U256,
}

/// Compute the balances and supply after moving `amounts` from `from` to `to`
pub(crate) fn plan_move<S: TokenStorage + ?Sized>(
    storage: &S,
    from: &Address,
    to: &Address,
    amounts: &TransferAmounts,
) -> TokenResult<MovePlan> {
    let new_from = storage
        .balance_of(from)
        .checked_sub(amounts.gross)
        .ok_or(TokenError::InsufficientBalance)?;

    // A self-transfer credits the already debited balance
    let to_base = if from == to {
        new_from
    } else {
        storage.balance_of(to)
    };
    let new_to = to_base
        .checked_add(amounts.net)
        .ok_or(TokenError::Overflow)?;

    let new_supply = storage
        .total_supply()
        .checked_sub(amounts.burned)
        .ok_or(TokenError::Underflow)?;

    Ok(MovePlan {
        new_from,
        new_to,
        new_supply,
    })
}

/// Write a plan produced by `plan_move` and record its events
pub(crate) fn apply_move<S: TokenStorage + ?Sized>(
    storage: &mut S,
    from: &Address,
    to: &Address,
    amounts: &TransferAmounts,
    plan: &MovePlan,
) {
    storage.set_balance(from, plan.new_from);
    storage.set_balance(to, plan.new_to);

    storage.emit(TokenEvent::Transfer {
        from: *from,
        to: *to,
        amount: amounts.net,
    });

    if !amounts.burned.is_zero() {
        storage.set_total_supply(plan.new_supply);
        storage.emit(TokenEvent::Burn {
            from: *from,
            amount: amounts.burned,
        });
    }
}

/// Move `amount` from the caller to `to`, burning per the current policy
///
/// # Returns
/// * `Ok(())` on success
/// * `Err(TokenError::ContractPaused)` if the ledger is paused
/// * `Err(TokenError::InvalidRecipient)` if `to` is the zero address
/// * `Err(TokenError::InsufficientBalance)` if the caller holds less than `amount`
pub fn transfer<S: TokenStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
    to: &Address,
    amount: U256,
) -> TokenResult<()> {
    // 1. Gates
    require_not_paused(storage)?;
    validate_recipient(to)?;

    // 2. Compute
    let amounts = TransferAmounts::compute(&storage.burn_policy(), amount)?;
    let plan = plan_move(storage, &ctx.caller, to, &amounts)?;

    // 3. Write
    apply_move(storage, &ctx.caller, to, &amounts, &plan);

    if log::log_enabled!(log::Level::Debug) {
        debug!(
            "Transfer {} -> {}: gross {}, burned {}",
            ctx.caller, to, amounts.gross, amounts.burned
        );
    }
    Ok(())
}

/// Move `amount` from `from` to `to` on behalf of the caller
///
/// The allowance is reduced by the gross amount, even when part of it burns.
///
/// # Returns
/// * `Ok(())` on success
/// * `Err(TokenError::ContractPaused)` if the ledger is paused
/// * `Err(TokenError::InsufficientAllowance)` if the caller's allowance is below `amount`
/// * `Err(TokenError::InvalidRecipient)` if `to` is the zero address
/// * `Err(TokenError::InsufficientBalance)` if `from` holds less than `amount`
pub fn transfer_from<S: TokenStorage>(
    storage: &mut S,
    ctx: &RuntimeContext,
    from: &Address,
    to: &Address,
    amount: U256,
) -> TokenResult<()> {
    // 1. Gate
    require_not_paused(storage)?;

    // 2. Allowance, spent before the recipient is looked at
    let new_allowance = storage
        .allowance(from, &ctx.caller)
        .checked_sub(amount)
        .ok_or(TokenError::InsufficientAllowance)?;
    validate_recipient(to)?;

    // 3. Compute
    let amounts = TransferAmounts::compute(&storage.burn_policy(), amount)?;
    let plan = plan_move(storage, from, to, &amounts)?;

    // 4. Write
    storage.set_allowance(from, &ctx.caller, new_allowance);
    apply_move(storage, from, to, &amounts, &plan);

    if log::log_enabled!(log::Level::Debug) {
        debug!(
            "TransferFrom {} -> {} by {}: gross {}, burned {}, allowance left {}",
            from, to, ctx.caller, amounts.gross, amounts.burned, new_allowance
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::approve::approve;
    use super::super::burn::{enable_transfer_with_burn, set_burn_rate};
    use super::super::pause::pause;
    use super::super::test_utils::*;
    use super::*;

    fn enable_burn(state: &mut crate::token::LedgerState, rate: u64) {
        let ctx = RuntimeContext::new(OWNER);
        set_burn_rate(state, &ctx, rate).unwrap();
        enable_transfer_with_burn(state, &ctx).unwrap();
    }

    #[test]
    fn test_transfer_success() {
        let mut state = setup_funded(1000);
        transfer(&mut state, &RuntimeContext::new(ALICE), &BOB, U256::from(300u64)).unwrap();

        assert_eq!(state.balance_of(&ALICE), U256::from(700u64));
        assert_eq!(state.balance_of(&BOB), U256::from(300u64));
        assert_eq!(state.total_supply(), U256::from(INITIAL_SUPPLY));
        assert_eq!(
            state.events(),
            &[TokenEvent::Transfer {
                from: ALICE,
                to: BOB,
                amount: U256::from(300u64)
            }]
        );
    }

    #[test]
    fn test_transfer_with_burn() {
        let mut state = setup_funded(1000);
        enable_burn(&mut state, 5);
        state.take_events();

        transfer(&mut state, &RuntimeContext::new(ALICE), &BOB, U256::from(400u64)).unwrap();

        // 400 * 5 / 1000 = 2
        assert_eq!(state.balance_of(&ALICE), U256::from(600u64));
        assert_eq!(state.balance_of(&BOB), U256::from(398u64));
        assert_eq!(state.total_supply(), U256::from(INITIAL_SUPPLY - 2));
        assert_eq!(state.sum_of_balances(), Some(state.total_supply()));
        assert_eq!(
            state.events(),
            &[
                TokenEvent::Transfer {
                    from: ALICE,
                    to: BOB,
                    amount: U256::from(398u64)
                },
                TokenEvent::Burn {
                    from: ALICE,
                    amount: U256::from(2u64)
                }
            ]
        );
    }

    #[test]
    fn test_disabled_burn_ignores_rate() {
        let mut state = setup_funded(1000);
        set_burn_rate(&mut state, &RuntimeContext::new(OWNER), 500).unwrap();

        transfer(&mut state, &RuntimeContext::new(ALICE), &BOB, U256::from(400u64)).unwrap();
        assert_eq!(state.balance_of(&BOB), U256::from(400u64));
        assert_eq!(state.total_supply(), U256::from(INITIAL_SUPPLY));
    }

    #[test]
    fn test_transfer_insufficient_balance() {
        let mut state = setup_funded(100);
        let before = state.clone();

        let result = transfer(&mut state, &RuntimeContext::new(ALICE), &BOB, U256::from(101u64));
        assert_eq!(result, Err(TokenError::InsufficientBalance));
        assert_eq!(state, before);
    }

    #[test]
    fn test_transfer_to_zero_address() {
        let mut state = setup_funded(100);
        let result = transfer(
            &mut state,
            &RuntimeContext::new(ALICE),
            &Address::zero(),
            U256::from(10u64),
        );
        assert_eq!(result, Err(TokenError::InvalidRecipient));
    }

    #[test]
    fn test_transfer_when_paused() {
        let mut state = setup_funded(100);
        pause(&mut state, &RuntimeContext::new(OWNER)).unwrap();
        let before = state.clone();

        // Pause is reported before any other failure
        let result = transfer(
            &mut state,
            &RuntimeContext::new(ALICE),
            &Address::zero(),
            U256::from(1000u64),
        );
        assert_eq!(result, Err(TokenError::ContractPaused));
        assert_eq!(state, before);
    }

    #[test]
    fn test_oversized_transfer_with_burn_is_insufficient_balance() {
        let mut state = setup_funded(100);
        enable_burn(&mut state, 5);
        let before = state.clone();

        let result = transfer(&mut state, &RuntimeContext::new(ALICE), &BOB, U256::MAX);
        assert_eq!(result, Err(TokenError::InsufficientBalance));
        assert_eq!(state, before);

        approve(&mut state, &RuntimeContext::new(ALICE), &BOB, U256::MAX).unwrap();
        let before = state.clone();
        let result = transfer_from(&mut state, &RuntimeContext::new(BOB), &ALICE, &BOB, U256::MAX);
        assert_eq!(result, Err(TokenError::InsufficientBalance));
        assert_eq!(state, before);
    }

    #[test]
    fn test_full_width_balance_moves_with_burn() {
        let mut state = setup();
        // Park every unit the integer can hold on ALICE
        state.set_total_supply(U256::MAX);
        state.set_balance(&CONTRACT, U256::zero());
        state.set_balance(&ALICE, U256::MAX);
        enable_burn(&mut state, 5);

        transfer(&mut state, &RuntimeContext::new(ALICE), &BOB, U256::MAX).unwrap();

        let burned = U256::MAX / U256::from(200u64);
        assert_eq!(state.balance_of(&ALICE), U256::zero());
        assert_eq!(state.balance_of(&BOB), U256::MAX - burned);
        assert_eq!(state.total_supply(), U256::MAX - burned);
    }

    #[test]
    fn test_self_transfer_with_burn() {
        let mut state = setup_funded(1000);
        enable_burn(&mut state, 10);

        transfer(&mut state, &RuntimeContext::new(ALICE), &ALICE, U256::from(500u64)).unwrap();
        assert_eq!(state.balance_of(&ALICE), U256::from(995u64));
        assert_eq!(state.total_supply(), U256::from(INITIAL_SUPPLY - 5));
        assert_eq!(state.sum_of_balances(), Some(state.total_supply()));
    }

    #[test]
    fn test_zero_amount_transfer() {
        let mut state = setup_funded(10);
        transfer(&mut state, &RuntimeContext::new(ALICE), &BOB, U256::zero()).unwrap();
        assert_eq!(state.balance_of(&ALICE), U256::from(10u64));
        assert_eq!(state.balance_of(&BOB), U256::zero());
    }

    #[test]
    fn test_transfer_from_debits_gross_allowance() {
        let mut state = setup_funded(1000);
        enable_burn(&mut state, 5);
        approve(&mut state, &RuntimeContext::new(ALICE), &BOB, U256::from(600u64)).unwrap();

        transfer_from(
            &mut state,
            &RuntimeContext::new(BOB),
            &ALICE,
            &OWNER,
            U256::from(400u64),
        )
        .unwrap();

        assert_eq!(state.allowance(&ALICE, &BOB), U256::from(200u64));
        assert_eq!(state.balance_of(&ALICE), U256::from(600u64));
        assert_eq!(state.balance_of(&OWNER), U256::from(398u64));
        assert_eq!(state.total_supply(), U256::from(INITIAL_SUPPLY - 2));
    }

    #[test]
    fn test_transfer_from_insufficient_allowance() {
        let mut state = setup_funded(1000);
        approve(&mut state, &RuntimeContext::new(ALICE), &BOB, U256::from(50u64)).unwrap();
        let before = state.clone();

        let result = transfer_from(
            &mut state,
            &RuntimeContext::new(BOB),
            &ALICE,
            &BOB,
            U256::from(51u64),
        );
        assert_eq!(result, Err(TokenError::InsufficientAllowance));
        assert_eq!(state, before);
    }

    #[test]
    fn test_transfer_from_checks_allowance_before_recipient() {
        let mut state = setup_funded(1000);
        approve(&mut state, &RuntimeContext::new(ALICE), &BOB, U256::from(50u64)).unwrap();
        let before = state.clone();

        let result = transfer_from(
            &mut state,
            &RuntimeContext::new(BOB),
            &ALICE,
            &Address::zero(),
            U256::from(51u64),
        );
        assert_eq!(result, Err(TokenError::InsufficientAllowance));

        let result = transfer_from(
            &mut state,
            &RuntimeContext::new(BOB),
            &ALICE,
            &Address::zero(),
            U256::from(50u64),
        );
        assert_eq!(result, Err(TokenError::InvalidRecipient));
        assert_eq!(state, before);
    }

    #[test]
    fn test_transfer_from_insufficient_balance() {
        let mut state = setup_funded(10);
        approve(&mut state, &RuntimeContext::new(ALICE), &BOB, U256::from(50u64)).unwrap();
        let before = state.clone();

        let result = transfer_from(
            &mut state,
            &RuntimeContext::new(BOB),
            &ALICE,
            &BOB,
            U256::from(20u64),
        );
        assert_eq!(result, Err(TokenError::InsufficientBalance));
        // Allowance untouched
        assert_eq!(state, before);
    }

    #[test]
    fn test_transfer_from_exhausts_allowance() {
        let mut state = setup_funded(100);
        approve(&mut state, &RuntimeContext::new(ALICE), &BOB, U256::from(100u64)).unwrap();

        transfer_from(
            &mut state,
            &RuntimeContext::new(BOB),
            &ALICE,
            &BOB,
            U256::from(100u64),
        )
        .unwrap();
        assert_eq!(state.allowance(&ALICE, &BOB), U256::zero());
        assert_eq!(state.allowances().count(), 0);
    }

    #[test]
    fn test_transfer_from_when_paused() {
        let mut state = setup_funded(100);
        approve(&mut state, &RuntimeContext::new(ALICE), &BOB, U256::from(100u64)).unwrap();
        pause(&mut state, &RuntimeContext::new(OWNER)).unwrap();
        let before = state.clone();

        let result = transfer_from(
            &mut state,
            &RuntimeContext::new(BOB),
            &ALICE,
            &BOB,
            U256::from(10u64),
        );
        assert_eq!(result, Err(TokenError::ContractPaused));
        assert_eq!(state, before);
    }
}
