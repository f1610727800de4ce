//! Pure aggregation helpers over record collections.

use std::collections::HashMap;

use chrono::NaiveDate;

use pocketmint_domain::{Amounted, Expense, ExpenseCategory};

pub struct SummaryService;

impl SummaryService {
    /// Sum of amounts over `records`; an empty collection yields 0.
    pub fn total<R: Amounted>(records: &[R]) -> f64 {
        records.iter().map(Amounted::amount).sum()
    }

    /// Spending grouped by category. Only categories with at least one
    /// record appear; the mapping carries no meaningful order.
    pub fn by_category(expenses: &[Expense]) -> HashMap<ExpenseCategory, f64> {
        Self::sum_categories(expenses.iter())
    }

    /// Same as [`Self::by_category`], restricted to expenses whose date
    /// falls within the inclusive `[start, end]` range.
    pub fn by_category_between(
        expenses: &[Expense],
        start: NaiveDate,
        end: NaiveDate,
    ) -> HashMap<ExpenseCategory, f64> {
        Self::sum_categories(
            expenses
                .iter()
                .filter(|expense| expense.date >= start && expense.date <= end),
        )
    }

    fn sum_categories<'a>(
        expenses: impl Iterator<Item = &'a Expense>,
    ) -> HashMap<ExpenseCategory, f64> {
        let mut totals = HashMap::new();
        for expense in expenses {
            *totals.entry(expense.category).or_insert(0.0) += expense.amount;
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketmint_domain::NewExpense;

    fn expense(amount: f64, category: ExpenseCategory, date: &str) -> Expense {
        Expense::create(NewExpense {
            amount,
            category,
            description: String::new(),
            date: date.parse().unwrap(),
        })
    }

    #[test]
    fn total_of_empty_collection_is_zero() {
        let none: Vec<Expense> = Vec::new();
        assert_eq!(SummaryService::total(&none), 0.0);
    }

    #[test]
    fn total_sums_amounts() {
        let expenses = vec![
            expense(10.0, ExpenseCategory::Food, "2024-03-01"),
            expense(5.5, ExpenseCategory::Food, "2024-03-02"),
        ];
        assert_eq!(SummaryService::total(&expenses), 15.5);
    }

    #[test]
    fn by_category_groups_and_omits_absent_categories() {
        let expenses = vec![
            expense(10.0, ExpenseCategory::Food, "2024-03-01"),
            expense(5.0, ExpenseCategory::Food, "2024-03-02"),
            expense(100.0, ExpenseCategory::Housing, "2024-03-03"),
        ];
        let totals = SummaryService::by_category(&expenses);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&ExpenseCategory::Food], 15.0);
        assert_eq!(totals[&ExpenseCategory::Housing], 100.0);
        assert!(!totals.contains_key(&ExpenseCategory::Shopping));
    }

    #[test]
    fn date_range_filter_is_inclusive_on_both_ends() {
        let expenses = vec![
            expense(1.0, ExpenseCategory::Food, "2024-02-29"),
            expense(2.0, ExpenseCategory::Food, "2024-03-01"),
            expense(4.0, ExpenseCategory::Food, "2024-03-31"),
            expense(8.0, ExpenseCategory::Food, "2024-04-01"),
        ];
        let totals = SummaryService::by_category_between(
            &expenses,
            "2024-03-01".parse().unwrap(),
            "2024-03-31".parse().unwrap(),
        );
        assert_eq!(totals[&ExpenseCategory::Food], 6.0);
    }
}
