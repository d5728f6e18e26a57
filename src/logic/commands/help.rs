use super::{find_definition, CommandDefinition, CommandResult};
use crate::errors::CommandError;

pub const HELP_USAGE: &str = "help: Shows the command summary, or the usage of one command.\n\
Parameters: [WORD]\n\
Example: help edit";
pub const EXIT_USAGE: &str = "exit: Leaves guiltTrip.\nExample: exit";
pub const MESSAGE_EXITING: &str = "Exiting guiltTrip as requested ...";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("help", "Show help", HELP_USAGE),
        CommandDefinition::new("exit", "Quit", EXIT_USAGE),
    ]
}

/// Without a word the front end prints the command summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpCommand {
    word: Option<String>,
}

impl HelpCommand {
    pub fn new(word: Option<String>) -> Self {
        Self { word }
    }

    pub fn execute(&self) -> Result<CommandResult, CommandError> {
        match self.word.as_deref().and_then(find_definition) {
            Some(definition) => Ok(CommandResult::new(definition.usage)),
            None => Ok(CommandResult::new("Opened help window.").with_help()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn execute(&self) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::new(MESSAGE_EXITING).with_exit())
    }
}
