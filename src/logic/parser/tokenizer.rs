//! Splits a command's argument string into prefixed values.
//!
//! `" 1 d/Lunch tag/food tag/work"` with prefixes `d/` and `tag/` yields the
//! preamble `"1"`, `d/ -> ["Lunch"]` and `tag/ -> ["food", "work"]`. A prefix is
//! only recognised at the start of the string or right after whitespace, so
//! `date/` never matches inside `update/`.

use std::collections::HashMap;
use std::fmt;

/// A marker such as `c/` that introduces an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Values captured per prefix, in the order they were typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value typed for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .get(&prefix)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    fn put(&mut self, prefix: Prefix, value: String) {
        self.values.entry(prefix).or_default().push(value);
    }
}

pub struct ArgumentTokenizer;

impl ArgumentTokenizer {
    pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
        let positions = find_all_prefix_positions(args, prefixes);

        let mut map = ArgumentMultimap::default();
        let preamble_end = positions.first().map(|(start, _)| *start).unwrap_or(args.len());
        map.preamble = args[..preamble_end].trim().to_string();

        for (idx, (start, prefix)) in positions.iter().enumerate() {
            let value_start = start + prefix.as_str().len();
            let value_end = positions
                .get(idx + 1)
                .map(|(next, _)| *next)
                .unwrap_or(args.len());
            map.put(*prefix, args[value_start..value_end].trim().to_string());
        }
        map
    }
}

fn find_all_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            args.match_indices(prefix.as_str())
                .filter(|(start, _)| is_token_start(args, *start))
                .map(move |(start, _)| (start, *prefix))
        })
        .collect();
    positions.sort_by_key(|(start, _)| *start);
    positions
}

fn is_token_start(args: &str, start: usize) -> bool {
    args[..start]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace)
}
