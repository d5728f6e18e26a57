use tracing::info;

use super::{entry_at, CommandDefinition, CommandResult};
use crate::errors::CommandError;
use crate::model::{Entry, Index, ListKind, Model};

pub const DELETE_USAGE: &str = "delete: Deletes the entries identified by the index numbers used in the displayed entry list.\n\
Parameters: INDEX[,INDEX]... (each must be a positive integer)\n\
Example: delete 1,3";
pub const DELETE_WISH_USAGE: &str = "deleteWish: Deletes the wishes identified by the index numbers used in the displayed wish list.\n\
Parameters: INDEX[,INDEX]... (each must be a positive integer)\n\
Example: deleteWish 1";
pub const DELETE_BUDGET_USAGE: &str = "deleteBudget: Deletes the budgets identified by the index numbers used in the displayed budget list.\n\
Parameters: INDEX[,INDEX]... (each must be a positive integer)\n\
Example: deleteBudget 1,2";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("delete", "Delete displayed entries", DELETE_USAGE),
        CommandDefinition::new("deleteWish", "Delete wishes", DELETE_WISH_USAGE),
        CommandDefinition::new("deleteBudget", "Delete budgets", DELETE_BUDGET_USAGE),
    ]
}

pub fn usage_for(list: ListKind) -> &'static str {
    match list {
        ListKind::Wishes => DELETE_WISH_USAGE,
        ListKind::Budgets => DELETE_BUDGET_USAGE,
        ListKind::Entries | ListKind::Incomes | ListKind::Expenses => DELETE_USAGE,
    }
}

/// Removes every entry at `indexes` of the displayed `list` in one undoable step.
/// Nothing is removed unless every index is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    list: ListKind,
    indexes: Vec<Index>,
}

impl DeleteCommand {
    pub fn new(list: ListKind, indexes: Vec<Index>) -> Self {
        Self { list, indexes }
    }

    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let targets = self
            .indexes
            .iter()
            .map(|index| entry_at(model, self.list, *index))
            .collect::<Result<Vec<Entry>, CommandError>>()?;

        info!(count = targets.len(), list = self.list.label(), "deleting entries");
        let mut deleted = Vec::with_capacity(targets.len());
        for target in targets {
            model.delete_entry(&target)?;
            deleted.push(format!("Deleted {}: {target}", target.kind()));
        }
        model.commit();
        Ok(CommandResult::new(deleted.join("\n")))
    }
}
