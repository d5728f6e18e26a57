use tracing::{info, warn};

use super::{CommandDefinition, CommandResult, PanelName};
use crate::errors::CommandError;
use crate::model::Model;

pub const UNDO_USAGE: &str = "undo: Reverts the last change to the entry book.\nExample: undo";
pub const REDO_USAGE: &str = "redo: Reapplies the last undone change.\nExample: redo";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("undo", "Undo the last change", UNDO_USAGE),
        CommandDefinition::new("redo", "Redo the last undone change", REDO_USAGE),
    ]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UndoCommand;

impl UndoCommand {
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if !model.can_undo() {
            warn!("nothing to undo");
            return Err(CommandError::NothingToUndo);
        }
        model.undo();
        info!("undo");
        Ok(CommandResult::new("Undo success!").with_panel(PanelName::Entries))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedoCommand;

impl RedoCommand {
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if !model.can_redo() {
            warn!("nothing to redo");
            return Err(CommandError::NothingToRedo);
        }
        model.redo();
        info!("redo");
        Ok(CommandResult::new("Redo success!").with_panel(PanelName::Entries))
    }
}
