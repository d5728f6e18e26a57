//! Search criteria used by `find`.

use super::amount::Amount;
use super::date::DateQuery;
use super::entry::Entry;
use super::tag::TagSet;

/// A single criterion over one entry field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryPredicate {
    /// Category name equals any keyword, ignoring case. Keywords may contain spaces.
    CategoryKeywords(Vec<String>),
    /// Description contains any keyword as a whole word, ignoring case.
    DescriptionKeywords(Vec<String>),
    OnDate(DateQuery),
    AmountAtLeast(Amount),
    /// Entry carries every listed tag.
    HasTags(TagSet),
}

impl EntryPredicate {
    pub fn test(&self, entry: &Entry) -> bool {
        match self {
            EntryPredicate::CategoryKeywords(keywords) => keywords
                .iter()
                .any(|keyword| entry.category().name().eq_ignore_ascii_case(keyword)),
            EntryPredicate::DescriptionKeywords(keywords) => keywords
                .iter()
                .any(|keyword| entry.description().contains_word_ignore_case(keyword)),
            EntryPredicate::OnDate(query) => query.matches(entry.date()),
            EntryPredicate::AmountAtLeast(threshold) => entry.amount() >= threshold,
            EntryPredicate::HasTags(tags) => tags.is_subset(entry.tags()),
        }
    }
}

/// Conjunction of predicates. An empty filter admits every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    predicates: Vec<EntryPredicate>,
}

impl EntryFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(predicates: Vec<EntryPredicate>) -> Self {
        Self { predicates }
    }

    pub fn predicates(&self) -> &[EntryPredicate] {
        &self.predicates
    }

    pub fn is_all(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        self.predicates.iter().all(|predicate| predicate.test(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::date::{Date, Month};
    use crate::model::tag::Tag;
    use crate::model::test_support::expense;

    fn tags(names: &[&str]) -> TagSet {
        names.iter().filter_map(|name| Tag::parse(name)).collect()
    }

    #[test]
    fn empty_filter_is_vacuously_true() {
        let filter = EntryFilter::all();
        assert!(filter.is_all());
        assert!(filter.matches(&expense("Food", "Lunch", "5.60", "2019-10-10")));
    }

    #[test]
    fn each_predicate_checks_its_field() {
        let lunch = expense("Food", "Chicken rice lunch", "5.60", "2019-10-10");

        assert!(EntryPredicate::CategoryKeywords(vec!["food".into()]).test(&lunch));
        assert!(!EntryPredicate::CategoryKeywords(vec!["bills".into()]).test(&lunch));
        assert!(EntryPredicate::DescriptionKeywords(vec!["dinner".into(), "LUNCH".into()])
            .test(&lunch));
        assert!(EntryPredicate::OnDate(DateQuery::Day(Date::from_ymd(2019, 10, 10).unwrap()))
            .test(&lunch));
        assert!(EntryPredicate::OnDate(DateQuery::Month(Month::new(2019, 10).unwrap()))
            .test(&lunch));
        assert!(EntryPredicate::AmountAtLeast(Amount::from_cents(560)).test(&lunch));
        assert!(!EntryPredicate::AmountAtLeast(Amount::from_cents(561)).test(&lunch));
        assert!(EntryPredicate::HasTags(TagSet::new()).test(&lunch));
        assert!(!EntryPredicate::HasTags(tags(&["work"])).test(&lunch));
    }

    #[test]
    fn conjunction_is_order_independent() {
        let entries = [
            expense("Food", "Lunch", "5.60", "2019-10-10"),
            expense("Food", "Lunch", "15.00", "2019-10-11"),
            expense("Travel", "Lunch trip", "50.00", "2019-10-12"),
        ];
        let description = EntryPredicate::DescriptionKeywords(vec!["lunch".into()]);
        let amount = EntryPredicate::AmountAtLeast(Amount::from_cents(1000));

        let forward = EntryFilter::new(vec![description.clone(), amount.clone()]);
        let backward = EntryFilter::new(vec![amount, description]);
        let pick = |filter: &EntryFilter| -> Vec<usize> {
            entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| filter.matches(entry))
                .map(|(idx, _)| idx)
                .collect()
        };
        assert_eq!(pick(&forward), vec![1]);
        assert_eq!(pick(&forward), pick(&backward));
    }
}
