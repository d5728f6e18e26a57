//! Categories group entries for statistics.

use std::fmt;

/// Whether a category collects spending or earnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKind {
    Expense,
    Income,
}

impl CategoryKind {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Category type should be `expense` or `income`";

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "expense" => Some(CategoryKind::Expense),
            "income" => Some(CategoryKind::Income),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Expense => f.write_str("Expense"),
            CategoryKind::Income => f.write_str("Income"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category {
    name: String,
    kind: CategoryKind,
}

impl Category {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Category names should not be blank";

    pub fn parse(name: &str, kind: CategoryKind) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            name: trimmed.to_string(),
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    /// Same kind, and names equal ignoring ASCII case.
    pub fn matches(&self, name: &str, kind: CategoryKind) -> bool {
        self.kind == kind && self.name.eq_ignore_ascii_case(name.trim())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The categories known to a book, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryList {
    categories: Vec<Category>,
}

const DEFAULT_EXPENSE_CATEGORIES: [&str; 6] = [
    "Food",
    "Travel",
    "Shopping",
    "Bills",
    "Entertainment",
    "Others",
];
const DEFAULT_INCOME_CATEGORIES: [&str; 5] = ["Salary", "Business", "Allowance", "Gifts", "Others"];

impl CategoryList {
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    pub fn find(&self, name: &str, kind: CategoryKind) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.matches(name, kind))
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.find(category.name(), category.kind()).is_some()
    }

    /// Adds the category unless an equivalent one exists. Returns whether it was added.
    pub fn add(&mut self, category: Category) -> bool {
        if self.contains(&category) {
            return false;
        }
        self.categories.push(category);
        true
    }

    pub fn of_kind(&self, kind: CategoryKind) -> impl Iterator<Item = &Category> {
        self.categories
            .iter()
            .filter(move |category| category.kind() == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryList {
    fn default() -> Self {
        let mut list = Self::empty();
        let defaults = DEFAULT_EXPENSE_CATEGORIES
            .iter()
            .map(|name| (*name, CategoryKind::Expense))
            .chain(
                DEFAULT_INCOME_CATEGORIES
                    .iter()
                    .map(|name| (*name, CategoryKind::Income)),
            );
        for (name, kind) in defaults {
            if let Some(category) = Category::parse(name, kind) {
                list.add(category);
            }
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_but_respects_kind() {
        let list = CategoryList::default();
        let food = list.find("food", CategoryKind::Expense).unwrap();
        assert_eq!(food.name(), "Food");
        assert!(list.find("food", CategoryKind::Income).is_none());
        assert!(list.find("Others", CategoryKind::Income).is_some());
    }

    #[test]
    fn add_refuses_equivalent_names() {
        let mut list = CategoryList::empty();
        assert!(list.add(Category::parse("Pets", CategoryKind::Expense).unwrap()));
        assert!(!list.add(Category::parse("PETS", CategoryKind::Expense).unwrap()));
        assert!(list.add(Category::parse("Pets", CategoryKind::Income).unwrap()));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn kind_parsing_is_case_insensitive() {
        assert_eq!(CategoryKind::parse("Income"), Some(CategoryKind::Income));
        assert_eq!(CategoryKind::parse("EXPENSE"), Some(CategoryKind::Expense));
        assert_eq!(CategoryKind::parse("wish"), None);
    }
}
