//! Per-category totals over a period of months.

use super::amount::Amount;
use super::category::{Category, CategoryKind, CategoryList};
use super::date::Period;
use super::entry::Entry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStatistic {
    pub category: Category,
    pub total: Amount,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub period: Period,
    pub expenses: Vec<CategoryStatistic>,
    pub incomes: Vec<CategoryStatistic>,
    pub total_expense: Amount,
    pub total_income: Amount,
}

impl Statistics {
    /// Totals every known category, zero rows included, over entries dated in `period`.
    pub fn compute(entries: &[Entry], categories: &CategoryList, period: Period) -> Self {
        let in_period: Vec<&Entry> = entries
            .iter()
            .filter(|entry| period.contains(entry.date()))
            .collect();

        let summarize = |kind: CategoryKind| -> Vec<CategoryStatistic> {
            categories
                .of_kind(kind)
                .map(|category| {
                    let matching = in_period
                        .iter()
                        .filter(|entry| entry.category() == category);
                    let (total, count) = matching.fold((Amount::zero(), 0), |(sum, n), entry| {
                        (sum + *entry.amount(), n + 1)
                    });
                    CategoryStatistic {
                        category: category.clone(),
                        total,
                        count,
                    }
                })
                .collect()
        };

        let expenses = summarize(CategoryKind::Expense);
        let incomes = summarize(CategoryKind::Income);
        let total_expense = expenses.iter().map(|row| row.total).sum();
        let total_income = incomes.iter().map(|row| row.total).sum();

        Self {
            period,
            expenses,
            incomes,
            total_expense,
            total_income,
        }
    }

    pub fn rows(&self, kind: CategoryKind) -> &[CategoryStatistic] {
        match kind {
            CategoryKind::Expense => &self.expenses,
            CategoryKind::Income => &self.incomes,
        }
    }
}
