//! Monetary amounts.
//!
//! Amounts are stored as whole cents so that equality, hashing and ordering are
//! exact. Only positive values are representable through parsing.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use once_cell::sync::Lazy;
use regex::Regex;

static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)(?:\.(\d{1,2}))?$").expect("amount pattern compiles"));

/// A positive amount of money, in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Amounts should be positive numbers with at most two decimal places, e.g. 5 or 5.60";

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parses `5`, `5.6` or `5.60`. Zero, signs and a third decimal place are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let captures = AMOUNT_PATTERN.captures(raw.trim())?;
        let whole: u64 = captures.get(1)?.as_str().parse().ok()?;
        let fraction = match captures.get(2).map(|m| m.as_str()) {
            None => 0,
            Some(digits) if digits.len() == 1 => digits.parse::<u64>().ok()? * 10,
            Some(digits) => digits.parse::<u64>().ok()?,
        };
        let cents = whole.checked_mul(100)?.checked_add(fraction)?;
        if cents == 0 {
            return None;
        }
        Some(Self(cents))
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_decimal_forms() {
        assert_eq!(Amount::parse("5"), Some(Amount::from_cents(500)));
        assert_eq!(Amount::parse("5.6"), Some(Amount::from_cents(560)));
        assert_eq!(Amount::parse(" 5.60 "), Some(Amount::from_cents(560)));
        assert_eq!(Amount::parse("0.05"), Some(Amount::from_cents(5)));
    }

    #[test]
    fn rejects_malformed_amounts() {
        for raw in ["", "0", "0.00", "-5", "+5", "5.601", "$5", "five", "5.", ".5"] {
            assert!(Amount::parse(raw).is_none(), "`{raw}` should be rejected");
        }
        assert!(Amount::parse("99999999999999999999").is_none());
    }

    #[test]
    fn displays_two_decimals_and_sums() {
        assert_eq!(Amount::from_cents(560).to_string(), "5.60");
        assert_eq!(Amount::from_cents(7).to_string(), "0.07");
        let total: Amount = [Amount::from_cents(150), Amount::from_cents(250)]
            .iter()
            .sum();
        assert_eq!(total, Amount::from_cents(400));
    }
}
