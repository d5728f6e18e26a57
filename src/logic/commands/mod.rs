//! One struct per user-facing operation, wrapped in [`Command`].

pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod help;
pub mod history;
pub mod list;
pub mod sort;
pub mod theme;
pub mod toggle;
pub mod undo;
pub mod view;

use crate::config::Theme;
use crate::errors::CommandError;
use crate::logic::history::CommandHistory;
use crate::model::{Entry, Index, ListKind, Model};

pub use add::{AddCategoryCommand, AddCommand};
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use find::FindCommand;
pub use help::{ExitCommand, HelpCommand};
pub use history::HistoryCommand;
pub use list::ListCommand;
pub use sort::SortCommand;
pub use theme::SetThemeCommand;
pub use toggle::{PanelVisibility, SidePanel, ToggleCommand};
pub use undo::{RedoCommand, UndoCommand};
pub use view::{StatisticsStyle, ViewEntryCommand, ViewStatisticsCommand};

/// Panels the front end can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelName {
    Entries,
    Wishes,
    Budgets,
    StatisticsTable,
    StatisticsBarChart,
}

/// Outcome of a command: a message for the user plus hints for the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub theme: Option<Theme>,
    pub panel: Option<PanelName>,
    pub toggle: Option<SidePanel>,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            theme: None,
            panel: None,
            toggle: None,
            show_help: false,
            exit: false,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_panel(mut self, panel: PanelName) -> Self {
        self.panel = Some(panel);
        self
    }

    pub fn with_toggle(mut self, panel: SidePanel) -> Self {
        self.toggle = Some(panel);
        self
    }

    pub fn with_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    AddCategory(AddCategoryCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    Sort(SortCommand),
    List(ListCommand),
    ViewEntry(ViewEntryCommand),
    ViewStatistics(ViewStatisticsCommand),
    SetTheme(SetThemeCommand),
    Toggle(ToggleCommand),
    Undo(UndoCommand),
    Redo(RedoCommand),
    History(HistoryCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    pub fn execute(
        &self,
        model: &mut dyn Model,
        history: &CommandHistory,
    ) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(command) => command.execute(model),
            Command::AddCategory(command) => command.execute(model),
            Command::Edit(command) => command.execute(model),
            Command::Delete(command) => command.execute(model),
            Command::Find(command) => command.execute(model),
            Command::Sort(command) => command.execute(model),
            Command::List(command) => command.execute(model),
            Command::ViewEntry(command) => command.execute(),
            Command::ViewStatistics(command) => command.execute(model),
            Command::SetTheme(command) => command.execute(),
            Command::Toggle(command) => command.execute(),
            Command::Undo(command) => command.execute(model),
            Command::Redo(command) => command.execute(model),
            Command::History(command) => command.execute(history),
            Command::Help(command) => command.execute(),
            Command::Exit(command) => command.execute(),
        }
    }
}

/// Name, summary and usage of a command word, for help and suggestions.
#[derive(Debug, Clone, Copy)]
pub struct CommandDefinition {
    pub word: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
}

impl CommandDefinition {
    pub const fn new(word: &'static str, description: &'static str, usage: &'static str) -> Self {
        Self {
            word,
            description,
            usage,
        }
    }
}

pub fn all_definitions() -> Vec<CommandDefinition> {
    let mut definitions = Vec::new();
    definitions.extend(add::definitions());
    definitions.extend(edit::definitions());
    definitions.extend(delete::definitions());
    definitions.extend(find::definitions());
    definitions.extend(sort::definitions());
    definitions.extend(list::definitions());
    definitions.extend(view::definitions());
    definitions.extend(theme::definitions());
    definitions.extend(toggle::definitions());
    definitions.extend(undo::definitions());
    definitions.extend(history::definitions());
    definitions.extend(help::definitions());
    definitions
}

pub fn find_definition(word: &str) -> Option<CommandDefinition> {
    all_definitions()
        .into_iter()
        .find(|definition| definition.word.eq_ignore_ascii_case(word))
}

/// Resolves a one-based index against the list as displayed right now.
pub(crate) fn entry_at(
    model: &dyn Model,
    list: ListKind,
    index: Index,
) -> Result<Entry, CommandError> {
    model
        .filtered_entries(list)
        .get(index.zero_based())
        .map(|entry| (*entry).clone())
        .ok_or(CommandError::InvalidDisplayedIndex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn command_words_are_unique_ignoring_case() {
        let words: Vec<String> = all_definitions()
            .iter()
            .map(|definition| definition.word.to_ascii_lowercase())
            .collect();
        let unique: HashSet<&String> = words.iter().collect();
        assert_eq!(unique.len(), words.len());
    }

    #[test]
    fn definitions_are_found_case_insensitively() {
        assert_eq!(find_definition("DELETEWISH").unwrap().word, "deleteWish");
        assert!(find_definition("nope").is_none());
    }
}
