use tracing::info;

use super::{CommandDefinition, CommandResult};
use crate::errors::CommandError;
use crate::model::{Category, Entry, Model};

pub const COMMAND_WORD: &str = "add";
pub const MESSAGE_USAGE: &str = "add: Adds an entry to guiltTrip.\n\
Parameters: t/TYPE c/CATEGORY d/DESCRIPTION a/AMOUNT [date/DATE] [tag/TAG]...\n\
TYPE is one of expense, income, wish, budget. A missing date means today.\n\
Example: add t/expense c/Food d/Lunch a/5.60 date/2019-10-10 tag/work";
pub const MESSAGE_SUCCESS: &str = "New entry added";

pub const ADD_CATEGORY_WORD: &str = "addCategory";
pub const ADD_CATEGORY_USAGE: &str = "addCategory: Adds a category entries can be filed under.\n\
Parameters: t/TYPE c/NAME\n\
TYPE is expense or income.\n\
Example: addCategory t/expense c/Pets";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(COMMAND_WORD, "Add an expense, income, wish or budget", MESSAGE_USAGE),
        CommandDefinition::new(ADD_CATEGORY_WORD, "Add a category", ADD_CATEGORY_USAGE),
    ]
}

/// Adds one entry. The category must already be known for the entry's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    entry: Entry,
}

impl AddCommand {
    pub fn new(entry: Entry) -> Self {
        Self { entry }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let requested = self.entry.category();
        let category = model
            .find_category(requested.name(), requested.kind())
            .ok_or_else(|| CommandError::UnknownCategory(requested.name().to_string()))?;

        let entry = self.entry.clone().with_category(category);
        info!(kind = %entry.kind(), category = %entry.category(), "adding entry");
        let message = format!("{MESSAGE_SUCCESS} ({}): {entry}", entry.kind());
        model.add_entry(entry);
        model.commit();
        Ok(CommandResult::new(message))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCategoryCommand {
    category: Category,
}

impl AddCategoryCommand {
    pub fn new(category: Category) -> Self {
        Self { category }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if !model.add_category(self.category.clone()) {
            return Err(CommandError::DuplicateCategory(
                self.category.name().to_string(),
            ));
        }
        info!(category = %self.category, kind = %self.category.kind(), "adding category");
        model.commit();
        Ok(CommandResult::new(format!(
            "New {} category added: {}",
            self.category.kind().to_string().to_lowercase(),
            self.category
        )))
    }
}
