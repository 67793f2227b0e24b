//! Numeric boundary helpers
//!
//! Form inputs arrive as free text. Anything that does not parse as a
//! decimal becomes zero instead of an error, so an in-progress draft can
//! always be recomputed.

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use std::str::FromStr;

/// Parse a decimal, treating blank or malformed input as zero
pub fn to_decimal(input: &str) -> BigDecimal {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return BigDecimal::zero();
    }

    match BigDecimal::from_str(trimmed) {
        Ok(value) => value,
        Err(_) => {
            tracing::trace!(input = trimmed, "non-numeric input coerced to zero");
            BigDecimal::zero()
        }
    }
}

/// Parse a decimal that must not be negative (quantities, rates, discounts)
pub fn to_non_negative_decimal(input: &str) -> BigDecimal {
    clamp_non_negative(&to_decimal(input))
}

/// Clamp a value to zero from below
pub fn clamp_non_negative(value: &BigDecimal) -> BigDecimal {
    if *value < BigDecimal::zero() {
        BigDecimal::zero()
    } else {
        value.clone()
    }
}

/// Round half-up to the given number of decimal places
pub fn round_currency(value: &BigDecimal, scale: i64) -> BigDecimal {
    value.with_scale_round(scale, RoundingMode::HalfUp)
}
