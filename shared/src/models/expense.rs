//! Expense Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expense entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(deserialize_with = "super::id_format::deserialize")]
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    /// Business date (YYYY-MM-DD)
    pub date: NaiveDate,
}

/// Create expense payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
}

/// Sum of expense amounts
pub fn total_expenses(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}
