//! Partial updates to entries.

use super::amount::Amount;
use super::category::Category;
use super::date::Date;
use super::description::Description;
use super::entry::Entry;
use super::tag::TagSet;

/// The fields a user asked to change. `None` means "keep the original value";
/// `tags: Some(empty)` clears the tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub category_name: Option<String>,
    pub description: Option<Description>,
    pub date: Option<Date>,
    pub amount: Option<Amount>,
    pub tags: Option<TagSet>,
}

impl EntryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category_name(mut self, name: impl Into<String>) -> Self {
        self.category_name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: Description) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_date(mut self, date: Date) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category_name.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.amount.is_none()
            && self.tags.is_none()
    }

    /// Builds the replacement entry. Kind and tracker come from `original`; a
    /// renamed category keeps the original category kind.
    pub fn apply(&self, original: &Entry) -> Entry {
        let category = self
            .category_name
            .as_deref()
            .and_then(|name| Category::parse(name, original.category().kind()))
            .unwrap_or_else(|| original.category().clone());
        let mut edited = Entry::new(
            original.kind(),
            category,
            self.description
                .clone()
                .unwrap_or_else(|| original.description().clone()),
            self.date.unwrap_or(*original.date()),
            self.amount.unwrap_or(*original.amount()),
            self.tags.clone().unwrap_or_else(|| original.tags().clone()),
        );
        edited.set_tracker(original.tracker());
        edited
    }
}
