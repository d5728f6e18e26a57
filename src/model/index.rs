//! One-based list positions as typed by the user.

use std::fmt;

/// A position in a displayed list. Stored zero-based; users type it one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self)
    }

    /// Parses a non-zero unsigned integer such as `3`. Leading `+` is not accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: usize = trimmed.parse().ok()?;
        Self::from_one_based(value)
    }

    pub const fn zero_based(&self) -> usize {
        self.0
    }

    pub const fn one_based(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_strings_map_to_zero_based() {
        for n in [1usize, 2, 10, 4096] {
            let index = Index::parse(&n.to_string()).unwrap();
            assert_eq!(index.zero_based(), n - 1);
            assert_eq!(index.one_based(), n);
        }
        assert_eq!(Index::parse("  7 "), Index::from_one_based(7));
    }

    #[test]
    fn rejects_non_positive_and_non_numeric() {
        for raw in ["0", "-1", "+1", "1.0", "one", "", "1 2", "99999999999999999999999"] {
            assert!(Index::parse(raw).is_none(), "`{raw}` should be rejected");
        }
    }
}
