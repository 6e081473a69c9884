use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to `places` decimal places with ties going away from zero.
///
/// Tie-breaking is decided over the decimal digits of the value's shortest
/// round-trip representation, so `round_half_away_from_zero(1.555, 2)` is
/// `1.56` even though the nearest double to 1.555 sits just below it.
pub fn round_half_away_from_zero(value: f64, places: u32) -> f64 {
    round_via_decimal(value, places, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to `places` decimal places with ties going toward positive
/// infinity: `1.5` rounds to `2`, `-1.5` rounds to `-1`.
pub fn round_half_up(value: f64, places: u32) -> f64 {
    round_via_decimal(value, places, half_up_strategy(value.is_sign_negative()))
}

/// Exact-decimal form of [`round_half_away_from_zero`].
pub fn round_decimal_half_away_from_zero(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Exact-decimal form of [`round_half_up`].
pub fn round_decimal_half_up(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, half_up_strategy(value.is_sign_negative()))
}

// Toward +inf means away from zero for positives, toward zero for negatives.
fn half_up_strategy(negative: bool) -> RoundingStrategy {
    if negative {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    }
}

fn round_via_decimal(value: f64, places: u32, strategy: RoundingStrategy) -> f64 {
    // Round over the shortest decimal representation so ties are decided on
    // the digits the caller saw, not on binary float artifacts.
    let Ok(decimal) = Decimal::from_str(&value.to_string()) else {
        // Out of Decimal range (or non-finite) there are no fractional
        // decimal digits left to round.
        return value;
    };
    decimal
        .round_dp_with_strategy(places, strategy)
        .to_f64()
        .unwrap_or(value)
}
