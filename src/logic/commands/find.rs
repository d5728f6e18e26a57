use tracing::debug;

use super::{CommandDefinition, CommandResult, PanelName};
use crate::errors::CommandError;
use crate::model::{EntryFilter, EntryPredicate, ListKind, Model};

pub const COMMAND_WORD: &str = "find";
pub const MESSAGE_USAGE: &str = "find: Finds entries matching every given criterion.\n\
Parameters: [c/CATEGORY,...] [d/KEYWORDS] [date/DATE or MONTH] [a/AMOUNT] [tag/TAG]...\n\
c/ takes comma-separated category names. a/ matches amounts at or above the value. tag/ requires every listed tag.\n\
Example: find c/food d/lunch dinner date/2019-10";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        COMMAND_WORD,
        "Filter entries by category, description, date, amount or tags",
        MESSAGE_USAGE,
    )]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicates: Vec<EntryPredicate>,
}

impl FindCommand {
    pub fn new(predicates: Vec<EntryPredicate>) -> Self {
        Self { predicates }
    }

    pub fn predicates(&self) -> &[EntryPredicate] {
        &self.predicates
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_entries(EntryFilter::new(self.predicates.clone()));
        let listed = model.filtered_entries(ListKind::Entries).len();
        debug!(listed, "find applied");
        Ok(CommandResult::new(format!("{listed} entries listed!")).with_panel(PanelName::Entries))
    }
}
