//! Precision-safe decimal types for order fields.
//!
//! Uses `rust_decimal` for exact decimal arithmetic, avoiding
//! floating-point rounding errors critical in financial calculations.
//! Prices and quantities travel as decimal strings on the wire.

use crate::error::{CoreError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Price with exact decimal precision.
///
/// Wraps `Decimal` to provide type safety and prevent mixing
/// prices with quantities in order construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Parse a decimal string, rejecting zero and negative values.
    pub fn parse(s: &str) -> Result<Self> {
        let value: Decimal = s
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidPrice(s.to_string()))?;
        let price = Self(value);
        if !price.is_positive() {
            return Err(CoreError::InvalidPrice(s.to_string()));
        }
        Ok(price)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Decimal> for Price {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

/// Order quantity with exact decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Size(pub Decimal);

impl Size {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Parse a decimal string, rejecting zero and negative values.
    pub fn parse(s: &str) -> Result<Self> {
        let value: Decimal = s
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidSize(s.to_string()))?;
        let size = Self(value);
        if !size.is_positive() {
            return Err(CoreError::InvalidSize(s.to_string()));
        }
        Ok(size)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Size {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Decimal> for Size {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_parse_valid() {
        let price = Price::parse("50000.5").unwrap();
        assert_eq!(price.inner(), dec!(50000.5));
    }

    #[test]
    fn test_price_parse_rejects_zero_and_negative() {
        assert!(Price::parse("0").is_err());
        assert!(Price::parse("-1.5").is_err());
        assert!(Price::parse("abc").is_err());
    }

    #[test]
    fn test_size_parse_trims_whitespace() {
        let size = Size::parse(" 0.01 ").unwrap();
        assert_eq!(size.inner(), dec!(0.01));
    }

    #[test]
    fn test_display_roundtrip() {
        let size = Size::new(dec!(0.001));
        assert_eq!(size.to_string(), "0.001");
        assert_eq!(size.to_string().parse::<Size>().unwrap(), size);
    }
}
