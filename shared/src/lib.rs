//! Shared types for the restaurant POS client
//!
//! Wire models exchanged with the backend API, auth DTOs, error bodies,
//! money formatting and the form validation rules used by every view.

pub mod client;
pub mod models;
pub mod money;
pub mod response;
pub mod validation;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use models::{
    DailySummary, Expense, MenuItem, NewExpense, NewOrder, NewSupply, Order, OrderItem,
    OrderStatus, Payment, PaymentBreakdown, PaymentMethod, StatusUpdate, Supply, SupplyPurchase,
    UnknownStatus, filter_by_status, low_stock,
};
pub use validation::ValidationError;
