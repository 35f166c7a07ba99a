//! Number rendering for reason texts
//!
//! Reason texts are read by people and compared by clients, so numbers are
//! rendered the way a browser renders them: shortest form for plain values,
//! ties rounded up for fixed decimals, and no negative zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Shortest rendering of a reading (`15`, `0.6`), with `-0` shown as `0`
pub fn number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Render `value` with exactly `digits` decimals, rounding ties away from zero.
///
/// The exact binary value is rounded, so `0.405 * 100.0` (exactly 40.5) gives
/// `41` while `1.005` (just under 1.005) gives `1.00`.
pub fn fixed(value: f64, digits: u32) -> String {
    let Some(magnitude) = Decimal::from_f64_retain(value.abs()) else {
        return number(value);
    };
    let rounded = magnitude.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    let sign = if value < 0.0 { "-" } else { "" };

    format!("{}{:.*}", sign, digits as usize, rounded)
}
