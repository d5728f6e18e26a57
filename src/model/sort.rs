//! Sort keys and directions for the entry list.

use std::cmp::Ordering;
use std::fmt;

use super::entry::Entry;

/// The key entries are sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortType {
    Time,
    Amount,
    Description,
    Category,
}

impl SortType {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Sort type should be one of: time, amount, description, category";

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "time" | "date" => Some(SortType::Time),
            "amount" => Some(SortType::Amount),
            "description" => Some(SortType::Description),
            "category" => Some(SortType::Category),
            _ => None,
        }
    }

    fn compare(&self, left: &Entry, right: &Entry) -> Ordering {
        match self {
            SortType::Time => left.date().cmp(right.date()),
            SortType::Amount => left.amount().cmp(right.amount()),
            SortType::Description => left
                .description()
                .as_str()
                .to_lowercase()
                .cmp(&right.description().as_str().to_lowercase()),
            SortType::Category => left
                .category()
                .name()
                .to_lowercase()
                .cmp(&right.category().name().to_lowercase()),
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortType::Time => "Time",
            SortType::Amount => "Amount",
            SortType::Description => "Description",
            SortType::Category => "Category",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortSequence {
    Ascending,
    Descending,
}

impl SortSequence {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Sort sequence should be `ascending` or `descending`";

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Some(SortSequence::Ascending),
            "descending" | "desc" => Some(SortSequence::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortSequence::Ascending => f.write_str("Ascending"),
            SortSequence::Descending => f.write_str("Descending"),
        }
    }
}

/// Sorts in place. Stable, so entries with equal keys keep their relative order
/// in both directions.
pub fn sort_entries(entries: &mut [Entry], sort_type: SortType, sequence: SortSequence) {
    entries.sort_by(|left, right| {
        let ordering = sort_type.compare(left, right);
        match sequence {
            SortSequence::Ascending => ordering,
            SortSequence::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::expense;

    #[test]
    fn parses_aliases() {
        assert_eq!(SortType::parse("Date"), Some(SortType::Time));
        assert_eq!(SortType::parse("AMOUNT"), Some(SortType::Amount));
        assert_eq!(SortType::parse("size"), None);
        assert_eq!(SortSequence::parse("desc"), Some(SortSequence::Descending));
        assert_eq!(SortSequence::parse("up"), None);
    }

    #[test]
    fn descending_sort_keeps_ties_in_insertion_order() {
        let mut entries = vec![
            expense("Food", "first", "5.00", "2019-10-01"),
            expense("Food", "second", "9.00", "2019-10-02"),
            expense("Food", "third", "5.00", "2019-10-03"),
        ];
        sort_entries(&mut entries, SortType::Amount, SortSequence::Descending);
        let order: Vec<&str> = entries.iter().map(|e| e.description().as_str()).collect();
        assert_eq!(order, vec!["second", "first", "third"]);

        sort_entries(&mut entries, SortType::Time, SortSequence::Ascending);
        let order: Vec<&str> = entries.iter().map(|e| e.description().as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }
}
