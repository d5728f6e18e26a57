//! Entry tags and the set an entry carries.

use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("tag pattern compiles"));

pub type TagSet = BTreeSet<Tag>;

/// A short alphanumeric label attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::is_valid_tag_name(trimmed).then(|| Self(trimmed.to_string()))
    }

    pub fn is_valid_tag_name(raw: &str) -> bool {
        TAG_PATTERN.is_match(raw)
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Renders a tag set as `[a][b]`, or an empty string.
pub fn format_tags(tags: &TagSet) -> String {
    tags.iter().map(Tag::to_string).collect()
}
