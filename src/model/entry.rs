//! Financial records.
//!
//! Every record is an [`Entry`] tagged with an [`EntryKind`]. Two entries are
//! equal only when they have the same kind and the same data; the weaker
//! [`Entry::is_same_entry`] ignores the kind and is used for duplicate detection.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::amount::Amount;
use super::category::{Category, CategoryKind};
use super::date::Date;
use super::description::Description;
use super::tag::{format_tags, TagSet};

/// Variant tag for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    Expense,
    Income,
    Wish,
    Budget,
}

impl EntryKind {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Entry type should be one of: expense, income, wish, budget";

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "expense" => Some(EntryKind::Expense),
            "income" => Some(EntryKind::Income),
            "wish" => Some(EntryKind::Wish),
            "budget" => Some(EntryKind::Budget),
            _ => None,
        }
    }

    /// Kind of category entries of this kind are filed under.
    pub fn category_kind(&self) -> CategoryKind {
        match self {
            EntryKind::Income => CategoryKind::Income,
            EntryKind::Expense | EntryKind::Wish | EntryKind::Budget => CategoryKind::Expense,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Expense => "Expense",
            EntryKind::Income => "Income",
            EntryKind::Wish => "Wish",
            EntryKind::Budget => "Budget",
        };
        f.write_str(label)
    }
}

/// Handle of the reminder condition tracking an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackerId(pub u32);

#[derive(Debug, Clone)]
pub struct Entry {
    kind: EntryKind,
    category: Category,
    description: Description,
    amount: Amount,
    date: Date,
    tags: TagSet,
    tracker: Option<TrackerId>,
}

impl Entry {
    pub fn new(
        kind: EntryKind,
        category: Category,
        description: Description,
        date: Date,
        amount: Amount,
        tags: TagSet,
    ) -> Self {
        Self {
            kind,
            category,
            description,
            amount,
            date,
            tags,
            tracker: None,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    pub fn date(&self) -> &Date {
        &self.date
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn tracker(&self) -> Option<TrackerId> {
        self.tracker
    }

    /// The only field that may change after construction.
    pub fn set_tracker(&mut self, tracker: Option<TrackerId>) {
        self.tracker = tracker;
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn is_same_entry(&self, other: &Entry) -> bool {
        self.category == other.category
            && self.description == other.description
            && self.amount == other.amount
            && self.tags == other.tags
            && self.date == other.date
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.is_same_entry(other)
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.description.hash(state);
        self.date.hash(state);
        self.amount.hash(state);
        self.category.hash(state);
        self.tags.hash(state);
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Amount: {} Date: {} Category: {} Tags: {}",
            self.description,
            self.amount,
            self.date,
            self.category,
            format_tags(&self.tags)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::{entry, expense};
    use std::collections::HashSet;

    #[test]
    fn equality_requires_matching_kind() {
        let as_expense = entry(EntryKind::Expense, "Food", "Dinner", "20", "2019-10-10");
        let as_wish = entry(EntryKind::Wish, "Food", "Dinner", "20", "2019-10-10");
        assert_ne!(as_expense, as_wish);
        assert!(as_expense.is_same_entry(&as_wish));
        assert_eq!(
            as_expense,
            entry(EntryKind::Expense, "Food", "Dinner", "20", "2019-10-10")
        );
    }

    #[test]
    fn any_field_difference_breaks_identity() {
        let base = expense("Food", "Dinner", "20", "2019-10-10");
        assert!(!base.is_same_entry(&expense("Bills", "Dinner", "20", "2019-10-10")));
        assert!(!base.is_same_entry(&expense("Food", "Supper", "20", "2019-10-10")));
        assert!(!base.is_same_entry(&expense("Food", "Dinner", "21", "2019-10-10")));
        assert!(!base.is_same_entry(&expense("Food", "Dinner", "20", "2019-10-11")));
    }

    #[test]
    fn tracker_does_not_affect_equality_or_hash() {
        let plain = expense("Food", "Dinner", "20", "2019-10-10");
        let mut tracked = plain.clone();
        tracked.set_tracker(Some(TrackerId(7)));
        assert_eq!(tracked.tracker(), Some(TrackerId(7)));
        assert_eq!(plain, tracked);

        let set: HashSet<Entry> = [plain, tracked].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn kinds_map_to_category_kinds() {
        assert_eq!(EntryKind::Income.category_kind(), CategoryKind::Income);
        assert_eq!(EntryKind::Wish.category_kind(), CategoryKind::Expense);
        assert_eq!(EntryKind::parse("BUDGET"), Some(EntryKind::Budget));
        assert_eq!(EntryKind::parse("gift"), None);
    }
}
