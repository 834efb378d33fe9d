use crate::error::FareError;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Add, str::FromStr};

const CENTS_PER_UNIT: u64 = 100;

/// A non-negative fare with two decimal places, stored as hundredths so that
/// sums and comparisons are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn from_units(units: u64) -> Self {
        Self(units * CENTS_PER_UNIT)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / CENTS_PER_UNIT as f64
    }

    pub fn checked_add(self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Price)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / CENTS_PER_UNIT, self.0 % CENTS_PER_UNIT)
    }
}

impl FromStr for Price {
    type Err = FareError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let invalid = || FareError::InvalidPrice(input.to_string());

        let (units_part, fraction_part) = match trimmed.split_once('.') {
            Some((units, fraction)) => (units, fraction),
            None => (trimmed, ""),
        };

        if units_part.is_empty() || fraction_part.len() > 2 {
            return Err(invalid());
        }
        if !units_part.bytes().all(|b| b.is_ascii_digit())
            || !fraction_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: u64 = units_part.parse().map_err(|_| invalid())?;
        let fraction: u64 = match fraction_part.len() {
            0 => 0,
            1 => fraction_part.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction_part.parse().map_err(|_| invalid())?,
        };

        units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|cents| cents.checked_add(fraction))
            .map(Price)
            .ok_or_else(invalid)
    }
}

impl TryFrom<f64> for Price {
    type Error = FareError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(FareError::InvalidPrice(value.to_string()));
        }

        let scaled = value * CENTS_PER_UNIT as f64;
        let cents = scaled.round();
        // Anything beyond two decimals is not a fixed-precision money value
        if (scaled - cents).abs() > 1e-6 || cents > u64::MAX as f64 {
            return Err(FareError::InvalidPrice(value.to_string()));
        }

        Ok(Price(cents as u64))
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.as_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_strings() {
        assert_eq!("30".parse::<Price>().unwrap(), Price::from_cents(3000));
        assert_eq!("123.45".parse::<Price>().unwrap(), Price::from_cents(12345));
        assert_eq!("0.5".parse::<Price>().unwrap(), Price::from_cents(50));
        assert_eq!(" 7.07 ".parse::<Price>().unwrap(), Price::from_cents(707));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<Price>().is_err());
        assert!("-1".parse::<Price>().is_err());
        assert!("1.234".parse::<Price>().is_err());
        assert!(".5".parse::<Price>().is_err());
        assert!("abc".parse::<Price>().is_err());
    }

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Price::from_cents(3000).to_string(), "30.00");
        assert_eq!(Price::from_cents(1205).to_string(), "12.05");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(Price::try_from(10.1).unwrap(), Price::from_cents(1010));
        assert_eq!(Price::try_from(399.99).unwrap(), Price::from_cents(39999));
        assert!(Price::try_from(-0.01).is_err());
        assert!(Price::try_from(f64::NAN).is_err());
        assert!(Price::try_from(1.005).is_err());
        assert_eq!(f64::from(Price::from_cents(3050)), 30.5);
    }

    #[test]
    fn test_addition_is_exact() {
        let sum = Price::try_from(10.1).unwrap() + Price::try_from(20.2).unwrap();
        assert_eq!(sum, Price::from_cents(3030));
        assert!(Price::from_cents(u64::MAX).checked_add(Price::from_cents(1)).is_none());
    }
}
