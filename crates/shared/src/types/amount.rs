//! Amount serialization for API payloads.
//!
//! Amounts are `rust_decimal::Decimal` everywhere in the code. On the wire they
//! are plain JSON numbers (`60`, `12.5`), not the string form `Decimal`
//! serializes to by default.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Serializes a decimal as a JSON number with trailing zeros removed.
///
/// Use with `#[serde(serialize_with = "...::amount::serialize_as_number")]`.
///
/// # Errors
///
/// Returns a serializer error if the decimal cannot be represented as a number.
pub fn serialize_as_number<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number = serde_json::Number::from_str(&amount.normalize().to_string())
        .map_err(serde::ser::Error::custom)?;
    number.serialize(serializer)
}
