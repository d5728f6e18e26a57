//! Domain values, the entry book and the model interface.

pub mod amount;
pub mod category;
pub mod date;
pub mod description;
pub mod entry;
pub mod entry_book;
pub mod index;
pub mod manager;
pub mod patch;
pub mod predicates;
pub mod sort;
pub mod statistics;
pub mod tag;
pub mod versioned;

pub use amount::Amount;
pub use category::{Category, CategoryKind, CategoryList};
pub use date::{Date, DateQuery, Month, Period};
pub use description::Description;
pub use entry::{Entry, EntryKind, TrackerId};
pub use entry_book::{BookList, EntryBook};
pub use index::Index;
pub use manager::{ListKind, Model, ModelManager};
pub use patch::EntryPatch;
pub use predicates::{EntryFilter, EntryPredicate};
pub use sort::{SortSequence, SortType};
pub use statistics::{CategoryStatistic, Statistics};
pub use tag::{Tag, TagSet};
pub use versioned::VersionedEntryBook;
