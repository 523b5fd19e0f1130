//! Currency on the wire: JSON numbers in, JSON numbers out, exact decimals in
//! between.

use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};
use serde::ser::Error as _;
use serde::Serializer;
use serde_json::Number;

use crate::errors::AppError;

pub(crate) fn amount_from_json(field: &str, value: &Number) -> Result<BigDecimal, AppError> {
    // serde_json prints the shortest representation that round-trips, so
    // `9.99` arrives as "9.99" and not as its binary expansion.
    BigDecimal::from_str(&value.to_string())
        .map_err(|_| AppError::BadRequest(format!("{field} is not a valid amount: {value}")))
}

pub(crate) fn serialize_amount<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let as_f64 = value
        .to_f64()
        .ok_or_else(|| S::Error::custom(format!("amount {value} does not fit a JSON number")))?;
    serializer.serialize_f64(as_f64)
}
