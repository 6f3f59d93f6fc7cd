//! Admin dashboard: daily close and expenses

use chrono::NaiveDate;
use shared::validation::{self, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN};
use shared::{DailySummary, Decimal, Expense, NewExpense};

use crate::{ClientResult, HttpClient};

/// Expense form state
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
}

impl ExpenseForm {
    /// Validate and build the payload for `date`
    pub fn to_payload(&self, date: NaiveDate) -> Result<NewExpense, validation::ValidationError> {
        let description = self.description.trim();
        let category = self.category.trim().to_lowercase();
        validation::validate_required_text(description, "description", MAX_NOTE_LEN)?;
        validation::validate_positive(self.amount, "amount")?;
        validation::validate_required_text(&category, "category", MAX_SHORT_TEXT_LEN)?;
        Ok(NewExpense {
            description: description.to_string(),
            amount: self.amount,
            category,
            date,
        })
    }
}

pub struct DashboardView {
    client: HttpClient,
    date: NaiveDate,
    summary: Option<DailySummary>,
    expenses: Vec<Expense>,
}

impl DashboardView {
    pub fn new(client: HttpClient, date: NaiveDate) -> Self {
        Self {
            client,
            date,
            summary: None,
            expenses: Vec::new(),
        }
    }

    /// Fetch the summary and the expense list for the view's date
    pub async fn mount(&mut self) -> ClientResult<()> {
        let (summary, expenses) = tokio::try_join!(
            self.client.daily_summary(self.date),
            self.client.list_expenses(self.date),
        )?;
        if !summary.is_balanced() {
            tracing::warn!(
                date = %self.date,
                "Daily summary net income does not match sales minus expenses"
            );
        }
        if !summary.breakdown_matches_sales() {
            tracing::warn!(date = %self.date, "Payment breakdown does not add up to total sales");
        }
        self.summary = Some(summary);
        self.expenses = expenses;
        Ok(())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn summary(&self) -> Option<&DailySummary> {
        self.summary.as_ref()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Register an expense on the view's date, then re-fetch
    pub async fn add_expense(&mut self, form: &ExpenseForm) -> ClientResult<Expense> {
        let payload = form.to_payload(self.date)?;
        let created = self.client.create_expense(&payload).await?;
        let operator = self.client.auth().operator().await;
        audit_log!(
            operator,
            "expense",
            format!("expense:{}", created.id),
            format!("{} {}", created.category, created.amount)
        );
        self.expenses.push(created.clone());
        if let Err(e) = self.mount().await {
            tracing::warn!(error = %e, "Dashboard refresh failed after adding expense");
        }
        Ok(created)
    }
}
