use super::parser_util::parse_indexes;
use crate::errors::ParseError;
use crate::logic::commands::{delete, Command, DeleteCommand};
use crate::model::ListKind;

/// `INDEX` or `INDEX,INDEX,...` against the displayed `list`.
pub fn parse_delete(list: ListKind, args: &str) -> Result<Command, ParseError> {
    let usage = delete::usage_for(list);
    let raw = args.trim();
    if raw.is_empty() {
        return Err(ParseError::MissingIndex { usage });
    }
    let indexes = parse_indexes(raw).map_err(|_| ParseError::InvalidFormat { usage })?;
    Ok(Command::Delete(DeleteCommand::new(list, indexes)))
}
