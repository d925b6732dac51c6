/// Monetary amount in whole currency units.
///
/// The storefront displays no sub-unit prices, so every amount in the system
/// is an integer number of currency units.
pub type Amount = i64;

/// Round to the nearest whole unit, halves rounding up.
///
/// Amounts in this system are never negative, so rounding half away from
/// zero and rounding half up coincide.
pub fn round_half_up(value: f64) -> Amount {
    value.round() as Amount
}

/// Percentage of an amount, rounded half-up to the nearest whole unit.
pub fn percentage_of(amount: Amount, percent: f64) -> Amount {
    round_half_up(amount as f64 * percent / 100.0)
}
