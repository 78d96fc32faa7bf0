//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monthly plan price in USD.
///
/// Decimal-backed so arithmetic and comparison never go through floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole-dollar amount.
    #[must_use]
    pub fn from_dollars(dollars: i64) -> Self {
        Self(Decimal::from(dollars))
    }

    /// Get the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display ("$19", "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        let normalized = self.0.normalize();
        format!("${normalized}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_dollars() {
        assert_eq!(Price::from_dollars(19).display(), "$19");
        assert_eq!(Price::from_dollars(0).display(), "$0");
    }

    #[test]
    fn test_display_cents() {
        assert_eq!(Price::new(Decimal::new(1999, 2)).display(), "$19.99");
    }

    #[test]
    fn test_ordering() {
        assert!(Price::from_dollars(19) < Price::from_dollars(99));
    }
}
