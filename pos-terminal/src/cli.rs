//! Command line interface
//!
//! Every option can also come from the environment (or a `.env` file).

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use shared::validation::ValidationError;
use shared::{Decimal, OrderStatus, PaymentMethod};

#[derive(Debug, Parser)]
#[command(name = "pos", version, about = "Restaurant point of sale")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "POS_API_URL")]
    pub api_url: Option<String>,

    /// Log in with this user before running the command
    #[arg(long, short = 'u', env = "POS_USERNAME")]
    pub username: Option<String>,

    #[arg(long, env = "POS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Log level
    #[arg(long, env = "POS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// JSON log output
    #[arg(long, env = "POS_LOG_JSON")]
    pub log_json: bool,

    /// Directory for rotating app logs and the audit trail
    #[arg(long, env = "POS_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Name printed on receipts
    #[arg(long, env = "POS_BUSINESS_NAME", default_value = "Restaurante")]
    pub business_name: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check credentials and show the logged-in user
    Login,
    /// List the menu
    Menu,
    /// Submit a new order
    Order(OrderArgs),
    /// Kitchen board
    Kitchen(KitchenArgs),
    /// Delivered orders awaiting payment
    Cashier(CashierArgs),
    /// Daily close and expenses
    Dashboard(DashboardArgs),
    /// Register an expense
    Expense(ExpenseArgs),
    /// Supplies and stock
    Inventory(InventoryArgs),
    /// Create a supply
    Supply(SupplyArgs),
    /// Register a supply purchase
    Purchase(PurchaseArgs),
}

#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Line item as ID or ID:QTY (repeatable)
    #[arg(long = "item", short = 'i', required = true, value_parser = parse_line)]
    pub items: Vec<LineArg>,

    /// Kitchen note for a line as ID=TEXT (repeatable)
    #[arg(long = "note", value_parser = parse_note)]
    pub notes: Vec<(String, String)>,
}

/// `ID` or `ID:QTY`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineArg {
    pub menu_item_id: String,
    pub quantity: u32,
}

pub fn parse_line(s: &str) -> Result<LineArg, String> {
    let s = s.trim();
    let (id, qty) = match s.rsplit_once(':') {
        Some((id, qty)) => {
            let qty = qty
                .parse::<u32>()
                .map_err(|_| format!("bad quantity in '{s}'"))?;
            (id, qty)
        }
        None => (s, 1),
    };
    if id.is_empty() {
        return Err("empty menu item id".to_string());
    }
    Ok(LineArg {
        menu_item_id: id.to_string(),
        quantity: qty,
    })
}

pub fn parse_note(s: &str) -> Result<(String, String), String> {
    let (id, text) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=TEXT, got '{s}'"))?;
    Ok((id.trim().to_string(), text.to_string()))
}

#[derive(Debug, Args)]
pub struct KitchenArgs {
    /// Keep the board on screen, refreshing on the polling interval
    #[arg(long, short = 'w')]
    pub watch: bool,

    /// Move an order to its next status
    #[arg(long, value_name = "ORDER_ID", conflicts_with = "watch")]
    pub advance: Option<String>,

    /// Set an explicit status (must be the next one)
    #[arg(long, requires = "advance", value_parser = parse_status)]
    pub to: Option<OrderStatus>,

    /// Polling interval in seconds
    #[arg(long, env = "POS_KITCHEN_POLL_SECS")]
    pub interval: Option<u64>,
}

pub fn parse_status(s: &str) -> Result<OrderStatus, String> {
    s.parse().map_err(|e: shared::models::order::UnknownStatus| e.to_string())
}

#[derive(Debug, Args)]
pub struct CashierArgs {
    /// Charge this order
    #[arg(long, value_name = "ORDER_ID")]
    pub pay: Option<String>,

    /// efectivo | yape
    #[arg(long, requires = "pay", default_value = "efectivo", value_parser = parse_method)]
    pub method: PaymentMethod,

    /// Cash received from the customer
    #[arg(long, requires = "pay", value_parser = parse_money)]
    pub received: Option<Decimal>,

    /// Print the boleta after charging
    #[arg(long, requires = "pay")]
    pub receipt: bool,
}

pub fn parse_method(s: &str) -> Result<PaymentMethod, String> {
    s.parse().map_err(|e: ValidationError| e.to_string())
}

pub fn parse_money(s: &str) -> Result<Decimal, String> {
    shared::money::parse_amount("amount", s).map_err(|e| e.to_string())
}

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Business date (YYYY-MM-DD), today by default
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct ExpenseArgs {
    #[arg(long, short = 'd')]
    pub description: String,

    #[arg(long, short = 'a', value_parser = parse_money)]
    pub amount: Decimal,

    /// insumos | servicios | personal | alquiler | otros, or free text
    #[arg(long, short = 'c', default_value = "otros")]
    pub category: String,

    /// Business date (YYYY-MM-DD), today by default
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct InventoryArgs {
    /// Only supplies at or below their minimum
    #[arg(long)]
    pub low: bool,
}

#[derive(Debug, Args)]
pub struct SupplyArgs {
    #[arg(long)]
    pub name: String,

    /// Unit of measure (kg, l, und)
    #[arg(long)]
    pub unit: String,

    #[arg(long = "min", value_parser = parse_money, default_value = "0")]
    pub min_stock: Decimal,

    #[arg(long = "current", value_parser = parse_money, default_value = "0")]
    pub current_stock: Decimal,
}

#[derive(Debug, Args)]
pub struct PurchaseArgs {
    #[arg(long = "supply", value_name = "SUPPLY_ID")]
    pub supply_id: String,

    #[arg(long, value_parser = parse_money)]
    pub quantity: Decimal,

    /// Total cost paid
    #[arg(long, value_parser = parse_money)]
    pub cost: Option<Decimal>,
}
