use tracing::{info, warn};

use super::{entry_at, CommandDefinition, CommandResult};
use crate::errors::CommandError;
use crate::model::{EntryFilter, EntryPatch, Index, ListKind, Model};

macro_rules! edit_usage {
    ($word:literal, $noun:literal) => {
        concat!(
            $word,
            ": Edits the ",
            $noun,
            " identified by the index number used in the displayed ",
            $noun,
            " list. Existing values will be overwritten by the input values.\n",
            "Parameters: INDEX (must be a positive integer) [c/CATEGORY] [d/DESCRIPTION] ",
            "[date/DATE] [a/AMOUNT] [tag/TAG]...\n",
            "Example: ",
            $word,
            " 1 a/5.60"
        )
    };
}

pub const EDIT_USAGE: &str = edit_usage!("edit", "entry");
pub const EDIT_INCOME_USAGE: &str = edit_usage!("editIncome", "income");
pub const EDIT_EXPENSE_USAGE: &str = edit_usage!("editExpense", "expense");
pub const EDIT_WISH_USAGE: &str = edit_usage!("editWish", "wish");
pub const EDIT_BUDGET_USAGE: &str = edit_usage!("editBudget", "budget");

pub const MESSAGE_EDIT_ENTRY_SUCCESS: &str = "Edited Entry";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("edit", "Edit a displayed entry", EDIT_USAGE),
        CommandDefinition::new("editIncome", "Edit a displayed income", EDIT_INCOME_USAGE),
        CommandDefinition::new("editExpense", "Edit a displayed expense", EDIT_EXPENSE_USAGE),
        CommandDefinition::new("editWish", "Edit a wish", EDIT_WISH_USAGE),
        CommandDefinition::new("editBudget", "Edit a budget", EDIT_BUDGET_USAGE),
    ]
}

pub fn usage_for(list: ListKind) -> &'static str {
    match list {
        ListKind::Entries => EDIT_USAGE,
        ListKind::Incomes => EDIT_INCOME_USAGE,
        ListKind::Expenses => EDIT_EXPENSE_USAGE,
        ListKind::Wishes => EDIT_WISH_USAGE,
        ListKind::Budgets => EDIT_BUDGET_USAGE,
    }
}

/// Replaces the entry at `index` of the displayed `list` with `patch` merged
/// over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    list: ListKind,
    index: Index,
    patch: EntryPatch,
}

impl EditCommand {
    pub fn new(list: ListKind, index: Index, patch: EntryPatch) -> Self {
        Self { list, index, patch }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = entry_at(model, self.list, self.index)?;

        let mut edited = self.patch.apply(&target);
        if self.patch.category_name.is_some() {
            let requested = edited.category();
            let category = model
                .find_category(requested.name(), requested.kind())
                .ok_or_else(|| CommandError::UnknownCategory(requested.name().to_string()))?;
            edited = edited.with_category(category);
        }

        // The target itself is allowed to match; any other match is a duplicate.
        let self_match = usize::from(target.is_same_entry(&edited));
        if model.entry_book().count_same_entries(&edited) > self_match {
            warn!(index = %self.index, "edit rejected as duplicate");
            return Err(CommandError::DuplicateEntry);
        }

        info!(index = %self.index, list = self.list.label(), "editing entry");
        model.set_entry(&target, edited.clone())?;
        model.update_filtered_entries(EntryFilter::all());
        model.commit();
        Ok(CommandResult::new(format!(
            "{MESSAGE_EDIT_ENTRY_SUCCESS}: {edited}"
        )))
    }
}
