//! View controllers
//!
//! Each view mirrors one screen: it fetches on mount, mutates local form
//! state, and submits then re-fetches. Views never talk to each other;
//! they only share the `HttpClient` (and through it the auth session).

pub mod cashier;
pub mod dashboard;
pub mod inventory;
pub mod kitchen;
pub mod login;
pub mod order_entry;

pub use cashier::CashierView;
pub use dashboard::{DashboardView, ExpenseForm};
pub use inventory::{InventoryView, PurchaseForm, SupplyForm};
pub use kitchen::KitchenView;
pub use login::LoginView;
pub use order_entry::OrderEntryView;
