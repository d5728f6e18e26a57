//! Free-text entry descriptions.

use std::fmt;

/// Free-text description of an entry. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Description(String);

impl Description {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Descriptions should not be blank and should not start with whitespace";

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `word` appears as a whole word, ignoring case.
    pub fn contains_word_ignore_case(&self, word: &str) -> bool {
        let needle = word.trim();
        if needle.is_empty() {
            return false;
        }
        self.0
            .split_whitespace()
            .any(|candidate| candidate.eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
