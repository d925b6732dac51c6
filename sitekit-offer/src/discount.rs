use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sitekit_shared::{round_half_up, Amount};

/// Discount magnitude, decided once at offer-creation time.
///
/// Administrators enter free-form strings like `"15% OFF"` or
/// `"₹5,000 OFF"`; the parser turns them into a tagged value here so the
/// checkout path never touches strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Discount {
    /// Percentage off the cart subtotal, in `0.0..=100.0`.
    Percentage(f64),
    /// Flat amount off, in whole currency units.
    FlatAmount(Amount),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiscountParseError {
    #[error("discount value has no numeric magnitude: {0:?}")]
    NoMagnitude(String),

    #[error("discount percentage out of range: {0}")]
    PercentageOutOfRange(String),
}

impl FromStr for Discount {
    type Err = DiscountParseError;

    /// Extract the numeric magnitude regardless of surrounding currency
    /// symbols, separators or words, then branch on the presence of `%`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let digits: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        let magnitude: f64 = digits
            .parse()
            .map_err(|_| DiscountParseError::NoMagnitude(raw.to_string()))?;

        if raw.contains('%') {
            if !(0.0..=100.0).contains(&magnitude) {
                return Err(DiscountParseError::PercentageOutOfRange(raw.to_string()));
            }
            Ok(Discount::Percentage(magnitude))
        } else {
            Ok(Discount::FlatAmount(round_half_up(magnitude)))
        }
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discount::Percentage(pct) => write!(f, "{}% off", pct),
            Discount::FlatAmount(amount) => write!(f, "{} off", amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percentage() {
        assert_eq!("15% OFF".parse::<Discount>().unwrap(), Discount::Percentage(15.0));
        assert_eq!("10%".parse::<Discount>().unwrap(), Discount::Percentage(10.0));
        assert_eq!("12.5% off".parse::<Discount>().unwrap(), Discount::Percentage(12.5));
    }

    #[test]
    fn test_parse_flat_amount() {
        assert_eq!("₹5,000 OFF".parse::<Discount>().unwrap(), Discount::FlatAmount(5000));
        assert_eq!("500".parse::<Discount>().unwrap(), Discount::FlatAmount(500));
        assert_eq!("$99 off everything".parse::<Discount>().unwrap(), Discount::FlatAmount(99));
    }

    #[test]
    fn test_parse_rejects_no_magnitude() {
        assert!(matches!(
            "FREE SHIPPING".parse::<Discount>(),
            Err(DiscountParseError::NoMagnitude(_))
        ));
        assert!("".parse::<Discount>().is_err());
    }

    #[test]
    fn test_parse_rejects_percentage_over_100() {
        assert!(matches!(
            "150% OFF".parse::<Discount>(),
            Err(DiscountParseError::PercentageOutOfRange(_))
        ));
    }
}
