//! Input validation for new financial events.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::EventType;

/// Largest number of decimal places a stored value keeps.
pub const MAX_SCALE: u32 = 4;

/// Exclusive upper bound on a stored value (`10^15`): fifteen integer digits
/// plus four decimal places fill a `NUMERIC(19,4)` column.
pub const MAX_VALUE: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Validates raw event input and returns the typed value and type.
///
/// Checks, in order: value present, type present and non-empty, type is a
/// known name, value is not negative, value is below [`MAX_VALUE`], value has
/// at most [`MAX_SCALE`] significant decimal places. Zero is accepted.
/// Trailing zeros do not count towards the scale and are stripped.
///
/// # Errors
///
/// Returns the first failing check as a `LedgerError`.
pub fn validate_event(
    value: Option<Decimal>,
    event_type: Option<&str>,
) -> Result<(Decimal, EventType), LedgerError> {
    let value = value.ok_or(LedgerError::MissingValue)?;
    let event_type = match event_type {
        None | Some("") => return Err(LedgerError::MissingType),
        Some(raw) => raw.parse::<EventType>()?,
    };

    if value < Decimal::ZERO {
        return Err(LedgerError::NegativeValue);
    }
    if value >= MAX_VALUE {
        return Err(LedgerError::ValueTooLarge { max: MAX_VALUE });
    }

    let value = value.normalize();
    if value.scale() > MAX_SCALE {
        return Err(LedgerError::TooManyDecimals {
            max_scale: MAX_SCALE,
        });
    }

    Ok((value, event_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(Some(dec!(100)), Some("INCOME"), dec!(100), EventType::Income)]
    #[case(Some(dec!(40)), Some("OUTCOME"), dec!(40), EventType::Outcome)]
    #[case(Some(dec!(0)), Some("INCOME"), dec!(0), EventType::Income)]
    #[case(Some(dec!(12.34)), Some("OUTCOME"), dec!(12.34), EventType::Outcome)]
    fn test_valid_input(
        #[case] value: Option<Decimal>,
        #[case] event_type: Option<&str>,
        #[case] expected_value: Decimal,
        #[case] expected_type: EventType,
    ) {
        let (v, t) = validate_event(value, event_type).unwrap();
        assert_eq!(v, expected_value);
        assert_eq!(t, expected_type);
    }

    #[test]
    fn test_missing_value() {
        assert!(matches!(
            validate_event(None, Some("INCOME")),
            Err(LedgerError::MissingValue)
        ));
    }

    #[test]
    fn test_missing_type() {
        assert!(matches!(
            validate_event(Some(dec!(1)), None),
            Err(LedgerError::MissingType)
        ));
        assert!(matches!(
            validate_event(Some(dec!(1)), Some("")),
            Err(LedgerError::MissingType)
        ));
    }

    #[test]
    fn test_unknown_type() {
        assert!(matches!(
            validate_event(Some(dec!(1)), Some("TRANSFER")),
            Err(LedgerError::UnknownType(_))
        ));
    }

    #[test]
    fn test_negative_value() {
        assert!(matches!(
            validate_event(Some(dec!(-5)), Some("INCOME")),
            Err(LedgerError::NegativeValue)
        ));
    }

    #[rstest]
    #[case(dec!(1_000_000_000_000_000))]
    #[case(dec!(50_000_000_000_000_000_000_000_000_000))]
    fn test_value_too_large(#[case] value: Decimal) {
        assert!(matches!(
            validate_event(Some(value), Some("INCOME")),
            Err(LedgerError::ValueTooLarge { .. })
        ));
    }

    #[test]
    fn test_largest_storable_value_accepted() {
        let (v, _) = validate_event(Some(dec!(999_999_999_999_999.9999)), Some("INCOME")).unwrap();
        assert_eq!(v, dec!(999_999_999_999_999.9999));
    }

    #[test]
    fn test_too_many_decimals() {
        assert!(matches!(
            validate_event(Some(dec!(12.123456789)), Some("OUTCOME")),
            Err(LedgerError::TooManyDecimals { max_scale: 4 })
        ));
        assert!(matches!(
            validate_event(Some(dec!(0.00001)), Some("OUTCOME")),
            Err(LedgerError::TooManyDecimals { .. })
        ));
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_decimals() {
        let (v, _) = validate_event(Some(dec!(12.1000000)), Some("OUTCOME")).unwrap();
        assert_eq!(v, dec!(12.1));
        assert_eq!(v.scale(), 1);
    }

    #[test]
    fn test_max_value_constant() {
        assert_eq!(MAX_VALUE, dec!(1_000_000_000_000_000));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let (v, _) = validate_event(Some(-Decimal::ZERO), Some("INCOME")).unwrap();
        assert!(v.is_zero());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Every negative amount is rejected whatever the type.
        #[test]
        fn prop_negative_values_rejected(
            cents in 1i64..100_000_000i64,
            income in any::<bool>(),
        ) {
            let event_type = if income { "INCOME" } else { "OUTCOME" };
            let result = validate_event(Some(Decimal::new(-cents, 2)), Some(event_type));
            prop_assert!(matches!(result, Err(LedgerError::NegativeValue)));
        }

        /// Every non-negative amount is accepted unchanged.
        #[test]
        fn prop_non_negative_values_accepted(cents in 0i64..100_000_000i64) {
            let value = Decimal::new(cents, 2);
            let (v, _) = validate_event(Some(value), Some("OUTCOME")).unwrap();
            prop_assert_eq!(v, value);
        }
    }
}
