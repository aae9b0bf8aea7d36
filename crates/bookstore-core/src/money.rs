//! # Money
//!
//! Prices, checkout totals and payment amounts, held as whole cents.
//!
//! Arithmetic is checked: a line or total that does not fit in an `i64` of
//! cents comes back as `None` and the caller turns it into an error.
//!
//! ```rust
//! use bookstore_core::money::Money;
//!
//! let price = Money::from_cents(2999);
//! let line = price.checked_times(3).unwrap();
//! assert_eq!(line.to_string(), "$89.97");
//! assert!(Money::from_cents(i64::MAX).checked_times(2).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount in cents. Prices are validated non-negative before they are
/// stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `self × quantity`, or `None` on overflow.
    #[inline]
    pub fn checked_times(self, quantity: i64) -> Option<Money> {
        self.0.checked_mul(quantity).map(Money)
    }

    /// `self + other`, or `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

/// `$D.CC`, for logs and the demo binary.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(i64::MIN).to_string(), "-$92233720368547758.08");
    }

    #[test]
    fn test_checked_arithmetic() {
        let price = Money::from_cents(1000);
        assert_eq!(price.checked_times(3), Some(Money::from_cents(3000)));
        assert_eq!(
            price.checked_add(Money::from_cents(2999)),
            Some(Money::from_cents(3999))
        );

        assert_eq!(Money::from_cents(i64::MAX / 2).checked_times(3), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_serializes_as_plain_cents() {
        let json = serde_json::to_string(&Money::from_cents(2999)).unwrap();
        assert_eq!(json, "2999");
    }
}
