use tracing::info;

use super::{CommandDefinition, CommandResult, PanelName};
use crate::errors::CommandError;
use crate::model::{Model, SortSequence, SortType};

pub const COMMAND_WORD: &str = "sort";
pub const MESSAGE_USAGE: &str = "sort: Sorts the entry list.\n\
Parameters: type/TYPE seq/SEQUENCE\n\
TYPE is one of time, amount, description, category. SEQUENCE is asc or desc.\n\
Example: sort type/amount seq/desc";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        COMMAND_WORD,
        "Sort entries by a field",
        MESSAGE_USAGE,
    )]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCommand {
    sort_type: SortType,
    sequence: SortSequence,
}

impl SortCommand {
    pub fn new(sort_type: SortType, sequence: SortSequence) -> Self {
        Self {
            sort_type,
            sequence,
        }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        info!(sort_type = %self.sort_type, sequence = %self.sequence, "sorting entries");
        model.sort_filtered_entries(self.sort_type, self.sequence);
        model.commit();
        Ok(
            CommandResult::new(format!(
                "Sorted all entries by {}",
                self.sort_type.to_string().to_lowercase()
            ))
                .with_panel(PanelName::Entries),
        )
    }
}
