//! Balance aggregation over financial events.
//!
//! The balance is a plain linear reduction: `+value` for INCOME, `-value` for
//! OUTCOME. It does not depend on the order events are visited in.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::FinancialEvent;

/// Returns the net balance of the given events; zero for none.
///
/// # Errors
///
/// Returns `LedgerError::BalanceOverflow` if the running total leaves the
/// range of `Decimal`.
pub fn compute_balance<'a>(
    events: impl IntoIterator<Item = &'a FinancialEvent>,
) -> Result<Decimal, LedgerError> {
    events.into_iter().try_fold(Decimal::ZERO, |sum, event| {
        sum.checked_add(event.signed_value())
            .ok_or(LedgerError::BalanceOverflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::types::EventType;
    use pocketbook_shared::{FinancialEventId, UserId};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn event(id: i32, value: Decimal, event_type: EventType) -> FinancialEvent {
        FinancialEvent {
            id: FinancialEventId(id),
            user_id: UserId(1),
            value,
            event_type,
        }
    }

    #[test]
    fn test_empty_balance_is_zero() {
        let none: Vec<FinancialEvent> = Vec::new();
        assert_eq!(compute_balance(&none).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_income_minus_outcome() {
        let events = [
            event(2, dec!(40), EventType::Outcome),
            event(1, dec!(100), EventType::Income),
        ];

        assert_eq!(compute_balance(&events).unwrap(), dec!(60));
    }

    #[test]
    fn test_balance_can_go_negative() {
        let events = [
            event(1, dec!(10.50), EventType::Income),
            event(2, dec!(25.25), EventType::Outcome),
        ];

        assert_eq!(compute_balance(&events).unwrap(), dec!(-14.75));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let income = [
            event(1, Decimal::MAX, EventType::Income),
            event(2, Decimal::MAX, EventType::Income),
        ];
        assert!(matches!(
            compute_balance(&income),
            Err(LedgerError::BalanceOverflow)
        ));

        let outcome = [
            event(1, Decimal::MAX, EventType::Outcome),
            event(2, Decimal::MAX, EventType::Outcome),
        ];
        assert!(matches!(
            compute_balance(&outcome),
            Err(LedgerError::BalanceOverflow)
        ));
    }

    #[test]
    fn test_large_totals_that_cancel_do_not_overflow() {
        let events = [
            event(1, Decimal::MAX, EventType::Income),
            event(2, Decimal::MAX, EventType::Outcome),
            event(3, dec!(5), EventType::Income),
        ];
        assert_eq!(compute_balance(&events).unwrap(), dec!(5));
    }

    /// Strategy for one event with a non-negative value.
    fn event_strategy() -> impl Strategy<Value = (Decimal, EventType)> {
        (
            (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
            prop_oneof![Just(EventType::Income), Just(EventType::Outcome)],
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The balance equals total income minus total outcome.
        #[test]
        fn prop_balance_is_income_minus_outcome(
            raw in prop::collection::vec(event_strategy(), 0..50),
        ) {
            let events: Vec<_> = raw
                .iter()
                .zip(1..)
                .map(|((value, t), id)| event(id, *value, *t))
                .collect();

            let income: Decimal = raw
                .iter()
                .filter(|(_, t)| *t == EventType::Income)
                .map(|(v, _)| *v)
                .sum();
            let outcome: Decimal = raw
                .iter()
                .filter(|(_, t)| *t == EventType::Outcome)
                .map(|(v, _)| *v)
                .sum();

            prop_assert_eq!(compute_balance(&events).unwrap(), income - outcome);
        }

        /// Any reordering of the same events gives the same balance.
        #[test]
        fn prop_balance_is_order_independent(
            (raw, shuffled) in prop::collection::vec(event_strategy(), 0..50)
                .prop_flat_map(|raw| {
                    let len = raw.len();
                    (Just(raw), Just((0..len).collect::<Vec<_>>()).prop_shuffle())
                }),
        ) {
            let events: Vec<_> = raw
                .iter()
                .zip(1..)
                .map(|((value, t), id)| event(id, *value, *t))
                .collect();
            let reordered: Vec<_> = shuffled.iter().map(|&i| events[i].clone()).collect();

            prop_assert_eq!(
                compute_balance(&events).unwrap(),
                compute_balance(&reordered).unwrap()
            );
        }
    }
}
