use super::{CommandDefinition, CommandResult};
use crate::errors::CommandError;
use crate::logic::history::CommandHistory;

pub const COMMAND_WORD: &str = "history";
pub const MESSAGE_USAGE: &str = "history: Lists previously entered commands, most recent first.\nExample: history";
pub const MESSAGE_NO_HISTORY: &str = "You have not yet entered any commands.";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        COMMAND_WORD,
        "Show entered commands",
        MESSAGE_USAGE,
    )]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryCommand;

impl HistoryCommand {
    pub fn execute(&self, history: &CommandHistory) -> Result<CommandResult, CommandError> {
        if history.is_empty() {
            return Ok(CommandResult::new(MESSAGE_NO_HISTORY));
        }
        let lines: Vec<&str> = history.iter().rev().map(String::as_str).collect();
        Ok(CommandResult::new(format!(
            "Entered commands (from most recent to earliest):\n{}",
            lines.join("\n")
        )))
    }
}
