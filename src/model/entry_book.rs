//! The authoritative in-memory lists.

use super::category::{Category, CategoryList};
use super::entry::{Entry, EntryKind};
use crate::errors::ModelError;

/// Which underlying list an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookList {
    /// Expenses and incomes.
    Entries,
    Wishes,
    Budgets,
}

impl BookList {
    pub fn for_kind(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Expense | EntryKind::Income => BookList::Entries,
            EntryKind::Wish => BookList::Wishes,
            EntryKind::Budget => BookList::Budgets,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryBook {
    entries: Vec<Entry>,
    wishes: Vec<Entry>,
    budgets: Vec<Entry>,
    categories: CategoryList,
}

impl EntryBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, list: BookList) -> &[Entry] {
        match list {
            BookList::Entries => &self.entries,
            BookList::Wishes => &self.wishes,
            BookList::Budgets => &self.budgets,
        }
    }

    pub(crate) fn list_mut(&mut self, list: BookList) -> &mut Vec<Entry> {
        match list {
            BookList::Entries => &mut self.entries,
            BookList::Wishes => &mut self.wishes,
            BookList::Budgets => &mut self.budgets,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn wishes(&self) -> &[Entry] {
        &self.wishes
    }

    pub fn budgets(&self) -> &[Entry] {
        &self.budgets
    }

    pub fn categories(&self) -> &CategoryList {
        &self.categories
    }

    /// True when the entry's list holds an entry that is the same entry.
    pub fn has_entry(&self, entry: &Entry) -> bool {
        self.count_same_entries(entry) > 0
    }

    pub fn count_same_entries(&self, entry: &Entry) -> usize {
        self.list(BookList::for_kind(entry.kind()))
            .iter()
            .filter(|existing| existing.is_same_entry(entry))
            .count()
    }

    pub fn add_entry(&mut self, entry: Entry) {
        self.list_mut(BookList::for_kind(entry.kind())).push(entry);
    }

    /// Replaces `target` in place. The edited entry must stay in the same list.
    pub fn set_entry(&mut self, target: &Entry, edited: Entry) -> Result<(), ModelError> {
        let list = self.list_mut(BookList::for_kind(target.kind()));
        let position = list
            .iter()
            .position(|existing| existing == target)
            .ok_or_else(|| ModelError::EntryNotFound(target.to_string()))?;
        list[position] = edited;
        Ok(())
    }

    pub fn remove_entry(&mut self, target: &Entry) -> Result<Entry, ModelError> {
        let list = self.list_mut(BookList::for_kind(target.kind()));
        let position = list
            .iter()
            .position(|existing| existing == target)
            .ok_or_else(|| ModelError::EntryNotFound(target.to_string()))?;
        Ok(list.remove(position))
    }

    pub fn add_category(&mut self, category: Category) -> bool {
        self.categories.add(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::{entry, expense};

    #[test]
    fn entries_are_routed_by_kind() {
        let mut book = EntryBook::new();
        book.add_entry(expense("Food", "Lunch", "5", "2019-10-10"));
        book.add_entry(entry(EntryKind::Income, "Salary", "Pay", "10", "2019-10-10"));
        book.add_entry(entry(EntryKind::Wish, "Shopping", "Phone", "900", "2019-10-10"));
        book.add_entry(entry(EntryKind::Budget, "Food", "Food cap", "300", "2019-10-01"));

        assert_eq!(book.entries().len(), 2);
        assert_eq!(book.wishes().len(), 1);
        assert_eq!(book.budgets().len(), 1);
    }

    #[test]
    fn replace_and_remove_match_by_value() {
        let mut book = EntryBook::new();
        let lunch = expense("Food", "Lunch", "5", "2019-10-10");
        let dinner = expense("Food", "Dinner", "9", "2019-10-10");
        book.add_entry(lunch.clone());
        book.add_entry(dinner.clone());

        let brunch = expense("Food", "Brunch", "7", "2019-10-10");
        book.set_entry(&lunch, brunch.clone()).unwrap();
        assert_eq!(book.entries()[0], brunch);
        assert!(matches!(
            book.set_entry(&lunch, brunch.clone()),
            Err(ModelError::EntryNotFound(_))
        ));

        assert_eq!(book.remove_entry(&dinner).unwrap(), dinner);
        assert_eq!(book.entries(), &[brunch]);
    }
}
