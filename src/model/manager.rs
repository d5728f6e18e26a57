//! The model interface commands run against, and its implementation.

use tracing::debug;

use super::category::{Category, CategoryKind};
use super::date::Period;
use super::entry::{Entry, EntryKind};
use super::entry_book::{BookList, EntryBook};
use super::predicates::EntryFilter;
use super::sort::{sort_entries, SortSequence, SortType};
use super::statistics::Statistics;
use super::versioned::VersionedEntryBook;
use crate::errors::ModelError;

/// A displayed list. `Incomes` and `Expenses` are the filtered entries of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Entries,
    Incomes,
    Expenses,
    Wishes,
    Budgets,
}

impl ListKind {
    pub fn book_list(&self) -> BookList {
        match self {
            ListKind::Entries | ListKind::Incomes | ListKind::Expenses => BookList::Entries,
            ListKind::Wishes => BookList::Wishes,
            ListKind::Budgets => BookList::Budgets,
        }
    }

    fn admits(&self, entry: &Entry) -> bool {
        match self {
            ListKind::Incomes => entry.kind() == EntryKind::Income,
            ListKind::Expenses => entry.kind() == EntryKind::Expense,
            ListKind::Entries | ListKind::Wishes | ListKind::Budgets => true,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListKind::Entries => "entries",
            ListKind::Incomes => "incomes",
            ListKind::Expenses => "expenses",
            ListKind::Wishes => "wishes",
            ListKind::Budgets => "budgets",
        }
    }
}

/// Everything a command may read or change.
pub trait Model {
    fn entry_book(&self) -> &EntryBook;

    /// The displayed list: filtered for entry views, complete for wishes and budgets.
    fn filtered_entries(&self, list: ListKind) -> Vec<&Entry>;

    fn has_entry(&self, entry: &Entry) -> bool;
    fn add_entry(&mut self, entry: Entry);
    fn set_entry(&mut self, target: &Entry, edited: Entry) -> Result<(), ModelError>;
    fn delete_entry(&mut self, target: &Entry) -> Result<(), ModelError>;

    fn entry_filter(&self) -> &EntryFilter;
    fn update_filtered_entries(&mut self, filter: EntryFilter);
    fn sort_filtered_entries(&mut self, sort_type: SortType, sequence: SortSequence);

    fn find_category(&self, name: &str, kind: CategoryKind) -> Option<Category>;
    fn add_category(&mut self, category: Category) -> bool;

    fn commit(&mut self);
    fn can_undo(&self) -> bool;
    fn undo(&mut self);
    fn can_redo(&self) -> bool;
    fn redo(&mut self);

    fn update_statistics(&mut self, period: Period);
    fn statistics(&self) -> Option<&Statistics>;
}

pub struct ModelManager {
    book: VersionedEntryBook,
    entry_filter: EntryFilter,
    statistics: Option<Statistics>,
}

impl ModelManager {
    pub fn new(book: EntryBook) -> Self {
        debug!(
            entries = book.entries().len(),
            wishes = book.wishes().len(),
            budgets = book.budgets().len(),
            "initialising model"
        );
        Self {
            book: VersionedEntryBook::new(book),
            entry_filter: EntryFilter::all(),
            statistics: None,
        }
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(EntryBook::new())
    }
}

impl Model for ModelManager {
    fn entry_book(&self) -> &EntryBook {
        self.book.current()
    }

    fn filtered_entries(&self, list: ListKind) -> Vec<&Entry> {
        let book_list = list.book_list();
        self.book
            .current()
            .list(book_list)
            .iter()
            .filter(|entry| list.admits(entry))
            .filter(|entry| book_list != BookList::Entries || self.entry_filter.matches(entry))
            .collect()
    }

    fn has_entry(&self, entry: &Entry) -> bool {
        self.book.current().has_entry(entry)
    }

    fn add_entry(&mut self, entry: Entry) {
        debug!(kind = %entry.kind(), "adding entry");
        self.book.current_mut().add_entry(entry);
        self.entry_filter = EntryFilter::all();
    }

    fn set_entry(&mut self, target: &Entry, edited: Entry) -> Result<(), ModelError> {
        self.book.current_mut().set_entry(target, edited)
    }

    fn delete_entry(&mut self, target: &Entry) -> Result<(), ModelError> {
        self.book.current_mut().remove_entry(target).map(|_| ())
    }

    fn entry_filter(&self) -> &EntryFilter {
        &self.entry_filter
    }

    fn update_filtered_entries(&mut self, filter: EntryFilter) {
        debug!(predicates = filter.predicates().len(), "updating entry filter");
        self.entry_filter = filter;
    }

    fn sort_filtered_entries(&mut self, sort_type: SortType, sequence: SortSequence) {
        debug!(%sort_type, %sequence, "sorting entries");
        let entries = self.book.current_mut().list_mut(BookList::Entries);
        sort_entries(entries, sort_type, sequence);
    }

    fn find_category(&self, name: &str, kind: CategoryKind) -> Option<Category> {
        self.book.current().categories().find(name, kind).cloned()
    }

    fn add_category(&mut self, category: Category) -> bool {
        self.book.current_mut().add_category(category)
    }

    fn commit(&mut self) {
        self.book.commit();
    }

    fn can_undo(&self) -> bool {
        self.book.can_undo()
    }

    fn undo(&mut self) {
        if self.book.undo() {
            self.entry_filter = EntryFilter::all();
        }
    }

    fn can_redo(&self) -> bool {
        self.book.can_redo()
    }

    fn redo(&mut self) {
        if self.book.redo() {
            self.entry_filter = EntryFilter::all();
        }
    }

    fn update_statistics(&mut self, period: Period) {
        let book = self.book.current();
        self.statistics = Some(Statistics::compute(
            book.entries(),
            book.categories(),
            period,
        ));
    }

    fn statistics(&self) -> Option<&Statistics> {
        self.statistics.as_ref()
    }
}
