//! Undo/redo history for the entry book.

use super::entry_book::EntryBook;

/// An [`EntryBook`] plus the committed snapshots it can move between.
///
/// Mutations happen on the working copy; `commit` records it. `undo`/`redo`
/// replace the working copy with a recorded snapshot.
#[derive(Debug, Clone)]
pub struct VersionedEntryBook {
    working: EntryBook,
    states: Vec<EntryBook>,
    pointer: usize,
}

impl VersionedEntryBook {
    pub fn new(initial: EntryBook) -> Self {
        Self {
            states: vec![initial.clone()],
            working: initial,
            pointer: 0,
        }
    }

    pub fn current(&self) -> &EntryBook {
        &self.working
    }

    pub fn current_mut(&mut self) -> &mut EntryBook {
        &mut self.working
    }

    /// Records the working copy, dropping any states that could have been redone.
    pub fn commit(&mut self) {
        self.states.truncate(self.pointer + 1);
        self.states.push(self.working.clone());
        self.pointer += 1;
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.states.len()
    }

    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.pointer -= 1;
        self.working = self.states[self.pointer].clone();
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.pointer += 1;
        self.working = self.states[self.pointer].clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::expense;

    #[test]
    fn undo_and_redo_walk_committed_states() {
        let mut book = VersionedEntryBook::new(EntryBook::new());
        assert!(!book.can_undo());
        assert!(!book.can_redo());

        book.current_mut()
            .add_entry(expense("Food", "Lunch", "5", "2019-10-10"));
        book.commit();
        book.current_mut()
            .add_entry(expense("Food", "Dinner", "9", "2019-10-10"));
        book.commit();

        assert!(book.undo());
        assert_eq!(book.current().entries().len(), 1);
        assert!(book.undo());
        assert!(book.current().entries().is_empty());
        assert!(!book.undo());

        assert!(book.redo());
        assert_eq!(book.current().entries().len(), 1);
    }

    #[test]
    fn commit_after_undo_discards_redo_states() {
        let mut book = VersionedEntryBook::new(EntryBook::new());
        book.current_mut()
            .add_entry(expense("Food", "Lunch", "5", "2019-10-10"));
        book.commit();
        book.undo();

        book.current_mut()
            .add_entry(expense("Food", "Supper", "12", "2019-10-10"));
        book.commit();
        assert!(!book.can_redo());
        assert_eq!(
            book.current().entries()[0].description().as_str(),
            "Supper"
        );
    }
}
