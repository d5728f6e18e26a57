use tracing::debug;

use super::parser_util::{
    error_if_compulsory_prefix_missing, parse_amount, parse_category_kind, parse_description,
    parse_entry_kind, parse_tags, parse_time,
};
use super::syntax::{
    PREFIX_AMOUNT, PREFIX_CATEGORY, PREFIX_DATE, PREFIX_DESC, PREFIX_TAG, PREFIX_TYPE,
};
use super::tokenizer::ArgumentTokenizer;
use crate::errors::ParseError;
use crate::logic::commands::add::{ADD_CATEGORY_USAGE, MESSAGE_USAGE};
use crate::logic::commands::{AddCategoryCommand, AddCommand, Command};
use crate::model::{Category, Entry};

pub fn parse_add(args: &str) -> Result<Command, ParseError> {
    let map = ArgumentTokenizer::tokenize(
        args,
        &[
            PREFIX_TYPE,
            PREFIX_CATEGORY,
            PREFIX_DESC,
            PREFIX_AMOUNT,
            PREFIX_DATE,
            PREFIX_TAG,
        ],
    );
    error_if_compulsory_prefix_missing(
        MESSAGE_USAGE,
        &map,
        false,
        &[PREFIX_TYPE, PREFIX_CATEGORY, PREFIX_DESC, PREFIX_AMOUNT],
    )?;

    let kind = parse_entry_kind(map.value(PREFIX_TYPE).unwrap_or_default())?;
    let category = parse_category(map.value(PREFIX_CATEGORY).unwrap_or_default(), kind.category_kind())?;
    let description = parse_description(map.value(PREFIX_DESC).unwrap_or_default())?;
    let amount = parse_amount(map.value(PREFIX_AMOUNT).unwrap_or_default())?;
    let date = parse_time(map.value(PREFIX_DATE))?;
    let tags = parse_tags(map.all_values(PREFIX_TAG))?;

    debug!(%kind, %amount, "parsed add");
    Ok(Command::Add(AddCommand::new(Entry::new(
        kind,
        category,
        description,
        date,
        amount,
        tags,
    ))))
}

pub fn parse_add_category(args: &str) -> Result<Command, ParseError> {
    let map = ArgumentTokenizer::tokenize(args, &[PREFIX_TYPE, PREFIX_CATEGORY]);
    error_if_compulsory_prefix_missing(
        ADD_CATEGORY_USAGE,
        &map,
        false,
        &[PREFIX_TYPE, PREFIX_CATEGORY],
    )?;

    let kind = parse_category_kind(map.value(PREFIX_TYPE).unwrap_or_default())?;
    let category = parse_category(map.value(PREFIX_CATEGORY).unwrap_or_default(), kind)?;
    Ok(Command::AddCategory(AddCategoryCommand::new(category)))
}

fn parse_category(raw: &str, kind: crate::model::CategoryKind) -> Result<Category, ParseError> {
    Category::parse(raw, kind).ok_or_else(|| ParseError::invalid(Category::MESSAGE_CONSTRAINTS))
}
