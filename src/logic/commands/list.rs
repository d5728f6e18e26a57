use super::{CommandDefinition, CommandResult, PanelName};
use crate::errors::CommandError;
use crate::model::{EntryFilter, ListKind, Model};

pub const LIST_USAGE: &str = "list: Lists all entries.\nExample: list";
pub const LIST_WISH_USAGE: &str = "listWish: Lists all wishes.\nExample: listWish";
pub const LIST_BUDGET_USAGE: &str = "listBudget: Lists all budgets.\nExample: listBudget";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("list", "Show every entry", LIST_USAGE),
        CommandDefinition::new("listWish", "Show every wish", LIST_WISH_USAGE),
        CommandDefinition::new("listBudget", "Show every budget", LIST_BUDGET_USAGE),
    ]
}

/// Shows a whole list. Listing entries drops any `find` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand {
    list: ListKind,
}

impl ListCommand {
    pub fn new(list: ListKind) -> Self {
        Self { list }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let panel = match self.list {
            ListKind::Wishes => PanelName::Wishes,
            ListKind::Budgets => PanelName::Budgets,
            ListKind::Entries | ListKind::Incomes | ListKind::Expenses => {
                model.update_filtered_entries(EntryFilter::all());
                PanelName::Entries
            }
        };
        Ok(CommandResult::new(format!("Listed all {}", self.list.label())).with_panel(panel))
    }
}
