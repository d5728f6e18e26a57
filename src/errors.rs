use thiserror::Error;

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Failures raised while turning user input into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: &'static str },
    #[error("Index is missing.\n{usage}")]
    MissingIndex { usage: &'static str },
    #[error("Unexpected text `{preamble}` before the arguments.\n{usage}")]
    RedundantPreamble {
        preamble: String,
        usage: &'static str,
    },
    #[error("Missing argument {prefix}\n{usage}")]
    MissingArgument {
        prefix: &'static str,
        usage: &'static str,
    },
    #[error("{0}")]
    InvalidValue(String),
    #[error("{message}\n{usage}")]
    InvalidArgument {
        message: String,
        usage: &'static str,
    },
    #[error("At least one field to edit must be provided.")]
    NotEdited,
    #[error("Unknown command `{word}`{}", suggestion_suffix(.suggestion))]
    UnknownCommand {
        word: String,
        suggestion: Option<&'static str>,
    },
}

fn suggestion_suffix(suggestion: &Option<&'static str>) -> String {
    suggestion
        .map(|name| format!(". Did you mean `{name}`?"))
        .unwrap_or_default()
}

impl ParseError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ParseError::InvalidValue(message.into())
    }

    /// Attaches the command's usage text to a bare value error.
    pub(crate) fn with_usage(self, usage: &'static str) -> Self {
        match self {
            ParseError::InvalidValue(message) => ParseError::InvalidArgument { message, usage },
            other => other,
        }
    }
}

/// Failures of the in-memory model itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Entry not found: {0}")]
    EntryNotFound(String),
}

/// Failures raised while executing an already parsed command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("The entry index provided is invalid")]
    InvalidDisplayedIndex,
    #[error("This entry already exists in guiltTrip.")]
    DuplicateEntry,
    #[error("The category `{0}` does not exist. Add it with `addCategory` first.")]
    UnknownCategory(String),
    #[error("The category `{0}` already exists.")]
    DuplicateCategory(String),
    #[error("No more commands to undo!")]
    NothingToUndo,
    #[error("No more commands to redo!")]
    NothingToRedo,
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Outcome of a failed round through the logic layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Errors while reading or writing user preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors that end the interactive shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}
