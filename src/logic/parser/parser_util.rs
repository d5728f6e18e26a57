//! Conversions from raw argument text to model values.
//!
//! Every function fails with [`ParseError::InvalidValue`] carrying the value
//! type's constraint message.

use crate::errors::{ParseError, MESSAGE_INVALID_INDEX};
use crate::model::{
    Amount, CategoryKind, Date, DateQuery, Description, EntryKind, Index, Month, Period,
    SortSequence, SortType, Tag, TagSet,
};

use super::tokenizer::{ArgumentMultimap, Prefix};

pub fn parse_index(raw: &str) -> Result<Index, ParseError> {
    Index::parse(raw).ok_or_else(|| ParseError::invalid(MESSAGE_INVALID_INDEX))
}

/// Comma-separated one-based indices. Repeats collapse into the first occurrence.
pub fn parse_indexes(raw: &str) -> Result<Vec<Index>, ParseError> {
    let mut indexes: Vec<Index> = Vec::new();
    for piece in raw.split(',') {
        let index = parse_index(piece.trim())?;
        if !indexes.contains(&index) {
            indexes.push(index);
        }
    }
    Ok(indexes)
}

pub fn parse_description(raw: &str) -> Result<Description, ParseError> {
    Description::parse(raw).ok_or_else(|| ParseError::invalid(Description::MESSAGE_CONSTRAINTS))
}

pub fn parse_amount(raw: &str) -> Result<Amount, ParseError> {
    Amount::parse(raw).ok_or_else(|| ParseError::invalid(Amount::MESSAGE_CONSTRAINTS))
}

pub fn parse_date(raw: &str) -> Result<Date, ParseError> {
    Date::parse(raw).ok_or_else(|| ParseError::invalid(Date::MESSAGE_CONSTRAINTS))
}

/// A missing date means today.
pub fn parse_time(raw: Option<&str>) -> Result<Date, ParseError> {
    raw.map_or_else(|| Ok(Date::today()), parse_date)
}

pub fn parse_period(raw: &str) -> Result<Period, ParseError> {
    Period::parse(raw).ok_or_else(|| ParseError::invalid(Period::MESSAGE_CONSTRAINTS))
}

pub fn parse_date_query(raw: &str) -> Result<DateQuery, ParseError> {
    DateQuery::parse(raw).ok_or_else(|| {
        ParseError::invalid(format!(
            "{} (or a month: {})",
            Date::MESSAGE_CONSTRAINTS,
            Month::MESSAGE_CONSTRAINTS
        ))
    })
}

pub fn parse_tag(raw: &str) -> Result<Tag, ParseError> {
    Tag::parse(raw).ok_or_else(|| ParseError::invalid(Tag::MESSAGE_CONSTRAINTS))
}

pub fn parse_tags<'a, I>(raw: I) -> Result<TagSet, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter().map(parse_tag).collect()
}

/// Splits on commas and whitespace, dropping empty pieces.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// Category names may contain spaces, so only commas separate them.
pub fn parse_category_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_sort_type(raw: &str) -> Result<SortType, ParseError> {
    SortType::parse(raw).ok_or_else(|| ParseError::invalid(SortType::MESSAGE_CONSTRAINTS))
}

pub fn parse_sort_sequence(raw: &str) -> Result<SortSequence, ParseError> {
    SortSequence::parse(raw).ok_or_else(|| ParseError::invalid(SortSequence::MESSAGE_CONSTRAINTS))
}

pub fn parse_entry_kind(raw: &str) -> Result<EntryKind, ParseError> {
    EntryKind::parse(raw).ok_or_else(|| ParseError::invalid(EntryKind::MESSAGE_CONSTRAINTS))
}

pub fn parse_category_kind(raw: &str) -> Result<CategoryKind, ParseError> {
    CategoryKind::parse(raw).ok_or_else(|| ParseError::invalid(CategoryKind::MESSAGE_CONSTRAINTS))
}

/// Rejects a missing preamble when one is needed, a stray preamble when none is,
/// and any absent compulsory prefix. Errors carry the command's usage text.
pub fn error_if_compulsory_prefix_missing(
    usage: &'static str,
    map: &ArgumentMultimap,
    need_preamble: bool,
    compulsory: &[Prefix],
) -> Result<(), ParseError> {
    let preamble = map.preamble();
    if need_preamble && preamble.is_empty() {
        return Err(ParseError::MissingIndex { usage });
    }
    if !need_preamble && !preamble.is_empty() {
        return Err(ParseError::RedundantPreamble {
            preamble: preamble.to_string(),
            usage,
        });
    }

    match compulsory
        .iter()
        .find(|prefix| map.value(**prefix).map_or(true, str::is_empty))
    {
        Some(prefix) => Err(ParseError::MissingArgument {
            prefix: prefix.as_str(),
            usage,
        }),
        None => Ok(()),
    }
}
