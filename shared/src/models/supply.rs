//! Supply (insumo) Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Supply entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supply {
    #[serde(deserialize_with = "super::id_format::deserialize")]
    pub id: String,
    pub name: String,
    /// Unit of measure (kg, l, und)
    pub unit: String,
    pub min_stock: Decimal,
    pub current_stock: Decimal,
}

impl Supply {
    /// Stock at or below the configured minimum
    pub fn is_low(&self) -> bool {
        self.current_stock <= self.min_stock
    }

    /// Units to buy to get back to the minimum
    pub fn shortfall(&self) -> Decimal {
        (self.min_stock - self.current_stock).max(Decimal::ZERO)
    }
}

/// Supplies at or below their minimum, in listing order
pub fn low_stock(supplies: &[Supply]) -> Vec<&Supply> {
    supplies.iter().filter(|s| s.is_low()).collect()
}

/// Create supply payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSupply {
    pub name: String,
    pub unit: String,
    pub min_stock: Decimal,
    pub current_stock: Decimal,
}

/// Purchase registration payload; the backend adds `quantity` to the stock
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyPurchase {
    pub supply_id: String,
    pub quantity: Decimal,
    /// Total cost of the purchase in soles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
}
