//! Currency helpers. Amounts are exact `BigDecimal`s with at most two
//! fractional digits, matching the `NUMERIC(_, 2)` columns they are stored in.

use bigdecimal::{BigDecimal, Zero};

use super::errors::DomainError;

/// Number of fractional digits carried by every currency amount.
pub const CENTS_SCALE: i64 = 2;

/// Total digits of a unit price column, `NUMERIC(10, 2)`.
pub const PRICE_PRECISION: u32 = 10;

/// Total digits of an order total column, `NUMERIC(12, 2)`.
pub const TOTAL_PRECISION: u32 = 12;

/// Checks that `value` is representable in cents and returns it normalised
/// to exactly two fractional digits.
pub fn to_cents(field: &str, value: &BigDecimal) -> Result<BigDecimal, DomainError> {
    let scaled = value.with_scale(CENTS_SCALE);
    if &scaled != value {
        return Err(DomainError::InvalidInput(format!(
            "{field} must have at most two decimal places, got {value}"
        )));
    }
    Ok(scaled)
}

/// Like [`to_cents`] but also rejects negative amounts.
pub fn to_non_negative_cents(field: &str, value: &BigDecimal) -> Result<BigDecimal, DomainError> {
    if value < &BigDecimal::zero() {
        return Err(DomainError::InvalidInput(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    to_cents(field, value)
}

/// Rejects amounts whose integer part does not fit a `NUMERIC(precision, 2)`
/// column.
pub fn check_precision(field: &str, value: &BigDecimal, precision: u32) -> Result<(), DomainError> {
    let limit = BigDecimal::from(10_i64.pow(precision - CENTS_SCALE as u32));
    if value.abs() >= limit {
        return Err(DomainError::InvalidInput(format!(
            "{field} must be below {limit}, got {value}"
        )));
    }
    Ok(())
}
