//! Parsing and executing commands against the model.

pub mod commands;
pub mod history;
pub mod parser;

use tracing::{debug, warn};

use crate::errors::LogicError;
use crate::model::{Entry, EntryBook, ListKind, Model, ModelManager, Statistics};
use commands::CommandResult;
use history::CommandHistory;
use parser::GuiltTripParser;

/// Owns the model and the session history; the single entry point for input.
pub struct LogicManager {
    model: ModelManager,
    history: CommandHistory,
}

impl LogicManager {
    pub fn new(model: ModelManager) -> Self {
        Self {
            model,
            history: CommandHistory::new(),
        }
    }

    pub fn execute(&mut self, text: &str) -> Result<CommandResult, LogicError> {
        debug!(input = text, "executing");
        self.history.add(text);
        let command = GuiltTripParser::parse_command(text).map_err(|err| {
            warn!(error = %err, "parse failed");
            err
        })?;
        let result = command
            .execute(&mut self.model, &self.history)
            .map_err(|err| {
                warn!(error = %err, "command failed");
                err
            })?;
        Ok(result)
    }

    pub fn entry_book(&self) -> &EntryBook {
        self.model.entry_book()
    }

    pub fn displayed(&self, list: ListKind) -> Vec<&Entry> {
        self.model.filtered_entries(list)
    }

    pub fn statistics(&self) -> Option<&Statistics> {
        self.model.statistics()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}

impl Default for LogicManager {
    fn default() -> Self {
        Self::new(ModelManager::default())
    }
}
