use super::parser_util::{error_if_compulsory_prefix_missing, parse_sort_sequence, parse_sort_type};
use super::syntax::{PREFIX_SEQUENCE, PREFIX_SORT_TYPE};
use super::tokenizer::ArgumentTokenizer;
use crate::errors::ParseError;
use crate::logic::commands::sort::MESSAGE_USAGE;
use crate::logic::commands::{Command, SortCommand};

pub fn parse_sort(args: &str) -> Result<Command, ParseError> {
    let map = ArgumentTokenizer::tokenize(args, &[PREFIX_SORT_TYPE, PREFIX_SEQUENCE]);
    error_if_compulsory_prefix_missing(
        MESSAGE_USAGE,
        &map,
        false,
        &[PREFIX_SORT_TYPE, PREFIX_SEQUENCE],
    )?;
    let sort_type = parse_sort_type(map.value(PREFIX_SORT_TYPE).unwrap_or_default())?;
    let sequence = parse_sort_sequence(map.value(PREFIX_SEQUENCE).unwrap_or_default())?;
    Ok(Command::Sort(SortCommand::new(sort_type, sequence)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SortSequence, SortType};

    #[test]
    fn parses_type_and_sequence() {
        assert_eq!(
            parse_sort(" type/amount seq/desc").unwrap(),
            Command::Sort(SortCommand::new(SortType::Amount, SortSequence::Descending))
        );
        assert!(matches!(
            parse_sort(" type/amount"),
            Err(ParseError::MissingArgument { prefix: "seq/", .. })
        ));
    }
}
