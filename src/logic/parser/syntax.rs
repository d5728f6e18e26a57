//! Prefixes understood by the command language.

use super::tokenizer::Prefix;

pub const PREFIX_TYPE: Prefix = Prefix::new("t/");
pub const PREFIX_CATEGORY: Prefix = Prefix::new("c/");
pub const PREFIX_DESC: Prefix = Prefix::new("d/");
pub const PREFIX_AMOUNT: Prefix = Prefix::new("a/");
pub const PREFIX_DATE: Prefix = Prefix::new("date/");
pub const PREFIX_TAG: Prefix = Prefix::new("tag/");
pub const PREFIX_SORT_TYPE: Prefix = Prefix::new("type/");
pub const PREFIX_SEQUENCE: Prefix = Prefix::new("seq/");
pub const PREFIX_PERIOD: Prefix = Prefix::new("p/");
