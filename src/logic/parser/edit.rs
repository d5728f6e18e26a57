use tracing::debug;

use super::parser_util::{
    parse_amount, parse_date, parse_description, parse_index, parse_tags,
};
use super::syntax::{PREFIX_AMOUNT, PREFIX_CATEGORY, PREFIX_DATE, PREFIX_DESC, PREFIX_TAG};
use super::tokenizer::{ArgumentMultimap, ArgumentTokenizer};
use crate::errors::ParseError;
use crate::logic::commands::{edit, Command, EditCommand};
use crate::model::{Category, EntryPatch, ListKind, TagSet};

/// Parses `INDEX [c/..] [d/..] [date/..] [a/..] [tag/..]...` for any edit word.
pub fn parse_edit(list: ListKind, args: &str) -> Result<Command, ParseError> {
    let usage = edit::usage_for(list);
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

    if map.preamble().is_empty() {
        return Err(ParseError::MissingIndex { usage });
    }
    let index = parse_index(map.preamble()).map_err(|_| ParseError::InvalidFormat { usage })?;

    let mut patch = EntryPatch::new();
    if let Some(name) = map.value(PREFIX_CATEGORY) {
        if name.is_empty() {
            return Err(ParseError::invalid(Category::MESSAGE_CONSTRAINTS));
        }
        patch = patch.with_category_name(name);
    }
    if let Some(raw) = map.value(PREFIX_DESC) {
        patch = patch.with_description(parse_description(raw)?);
    }
    if let Some(raw) = map.value(PREFIX_DATE) {
        patch = patch.with_date(parse_date(raw)?);
    }
    if let Some(raw) = map.value(PREFIX_AMOUNT) {
        patch = patch.with_amount(parse_amount(raw)?);
    }
    if let Some(tags) = parse_tags_for_edit(&map)? {
        patch = patch.with_tags(tags);
    }

    if patch.is_empty() {
        return Err(ParseError::NotEdited);
    }
    debug!(%index, list = list.label(), "parsed edit");
    Ok(Command::Edit(EditCommand::new(list, index, patch)))
}

/// A lone empty `tag/` clears the tags.
fn parse_tags_for_edit(map: &ArgumentMultimap) -> Result<Option<TagSet>, ParseError> {
    if !map.is_present(PREFIX_TAG) {
        return Ok(None);
    }
    let values = map.all_values(PREFIX_TAG);
    if values.len() == 1 && values[0].is_empty() {
        return Ok(Some(TagSet::new()));
    }
    parse_tags(values).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, Index};

    #[test]
    fn parses_partial_edit() {
        let command = parse_edit(ListKind::Entries, " 2 a/5.60 c/food").unwrap();
        let expected = EntryPatch::new()
            .with_category_name("food")
            .with_amount(Amount::from_cents(560));
        assert_eq!(
            command,
            Command::Edit(EditCommand::new(
                ListKind::Entries,
                Index::from_one_based(2).unwrap(),
                expected
            ))
        );
    }

    #[test]
    fn empty_tag_prefix_clears_tags() {
        let command = parse_edit(ListKind::Wishes, " 1 tag/").unwrap();
        let expected = EntryPatch::new().with_tags(TagSet::new());
        assert_eq!(
            command,
            Command::Edit(EditCommand::new(
                ListKind::Wishes,
                Index::from_one_based(1).unwrap(),
                expected
            ))
        );
    }

    #[test]
    fn rejects_missing_index_and_empty_patch() {
        assert_eq!(
            parse_edit(ListKind::Entries, " a/5"),
            Err(ParseError::MissingIndex {
                usage: edit::EDIT_USAGE
            })
        );
        assert_eq!(
            parse_edit(ListKind::Budgets, " 0 a/5"),
            Err(ParseError::InvalidFormat {
                usage: edit::EDIT_BUDGET_USAGE
            })
        );
        assert_eq!(parse_edit(ListKind::Entries, " 1"), Err(ParseError::NotEdited));
    }
}
