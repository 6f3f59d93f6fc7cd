//! Daily financial summary (cierre diario)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PaymentMethod;

/// Sales split by payment method
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub cash: Decimal,
    pub yape: Decimal,
}

impl PaymentBreakdown {
    pub fn get(&self, method: PaymentMethod) -> Decimal {
        match method {
            PaymentMethod::Cash => self.cash,
            PaymentMethod::Yape => self.yape,
        }
    }

    pub fn total(&self) -> Decimal {
        self.cash + self.yape
    }
}

/// Daily summary computed by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub total_sales: Decimal,
    pub total_expenses: Decimal,
    pub net_income: Decimal,
    #[serde(default)]
    pub breakdown: PaymentBreakdown,
}

impl DailySummary {
    /// `netIncome == totalSales − totalExpenses`
    pub fn is_balanced(&self) -> bool {
        self.net_income == self.total_sales - self.total_expenses
    }

    /// Breakdown adds up to the sales total
    pub fn breakdown_matches_sales(&self) -> bool {
        self.breakdown.total() == self.total_sales
    }
}
