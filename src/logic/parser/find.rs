use tracing::debug;

use super::parser_util::{
    parse_amount, parse_category_keywords, parse_date_query, parse_keywords, parse_tags,
};
use super::syntax::{PREFIX_AMOUNT, PREFIX_CATEGORY, PREFIX_DATE, PREFIX_DESC, PREFIX_TAG};
use super::tokenizer::ArgumentTokenizer;
use crate::errors::ParseError;
use crate::logic::commands::find::MESSAGE_USAGE;
use crate::logic::commands::{Command, FindCommand};
use crate::model::EntryPredicate;

pub fn parse_find(args: &str) -> Result<Command, ParseError> {
    let map = ArgumentTokenizer::tokenize(
        args,
        &[
            PREFIX_CATEGORY,
            PREFIX_DESC,
            PREFIX_DATE,
            PREFIX_AMOUNT,
            PREFIX_TAG,
        ],
    );
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: MESSAGE_USAGE,
        });
    }

    let mut predicates = Vec::new();
    if let Some(raw) = map.value(PREFIX_CATEGORY) {
        let names = non_empty(parse_category_keywords(raw))?;
        predicates.push(EntryPredicate::CategoryKeywords(names));
    }
    if let Some(raw) = map.value(PREFIX_DESC) {
        let words = non_empty(parse_keywords(raw))?;
        predicates.push(EntryPredicate::DescriptionKeywords(words));
    }
    if let Some(raw) = map.value(PREFIX_DATE) {
        predicates.push(EntryPredicate::OnDate(parse_date_query(raw)?));
    }
    if let Some(raw) = map.value(PREFIX_AMOUNT) {
        predicates.push(EntryPredicate::AmountAtLeast(parse_amount(raw)?));
    }
    if map.is_present(PREFIX_TAG) {
        predicates.push(EntryPredicate::HasTags(parse_tags(map.all_values(PREFIX_TAG))?));
    }

    debug!(criteria = predicates.len(), "parsed find");
    Ok(Command::Find(FindCommand::new(predicates)))
}

fn non_empty(keywords: Vec<String>) -> Result<Vec<String>, ParseError> {
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: MESSAGE_USAGE,
        });
    }
    Ok(keywords)
}
