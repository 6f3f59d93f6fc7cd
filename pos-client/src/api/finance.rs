//! Finance API

use chrono::NaiveDate;
use shared::{DailySummary, Expense, NewExpense};

use crate::{ClientResult, HttpClient};

fn date_query(date: NaiveDate) -> [(&'static str, String); 1] {
    [("date", date.format("%Y-%m-%d").to_string())]
}

impl HttpClient {
    /// Daily close for a business date
    pub async fn daily_summary(&self, date: NaiveDate) -> ClientResult<DailySummary> {
        self.get_query("/finance/summary", &date_query(date)).await
    }

    /// Expenses registered on a business date
    pub async fn list_expenses(&self, date: NaiveDate) -> ClientResult<Vec<Expense>> {
        self.get_query("/finance/expenses", &date_query(date)).await
    }

    pub async fn create_expense(&self, expense: &NewExpense) -> ClientResult<Expense> {
        self.post("/finance/expenses", expense).await
    }
}
