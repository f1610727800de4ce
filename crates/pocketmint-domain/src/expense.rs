//! Domain models for logged expenses.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A single logged spending entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl Expense {
    /// Builds a new expense with a freshly generated identifier.
    pub fn create(input: NewExpense) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount: input.amount,
            category: input.category,
            description: input.description,
            date: input.date,
        }
    }

    /// Merges `patch` over this expense. Absent fields keep their stored
    /// value; the identifier is never touched.
    pub fn apply(&mut self, patch: ExpensePatch) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Closed set of spending categories recognised by the tracker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transportation,
    Housing,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Other,
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseCategory::Food => "food",
            ExpenseCategory::Transportation => "transportation",
            ExpenseCategory::Housing => "housing",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::Entertainment => "entertainment",
            ExpenseCategory::Healthcare => "healthcare",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Other => "other",
        };
        f.write_str(label)
    }
}

/// Input shape for creating an expense; the identifier is assigned later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

/// Field-by-field update for an expense. Every field is optional; the
/// identifier cannot be altered through a patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpensePatch {
    pub amount: Option<f64>,
    pub category: Option<ExpenseCategory>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}
