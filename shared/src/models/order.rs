//! Order Model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status
///
/// Kitchen flow: `Pendiente → Listo → Entregado`. Serialized verbatim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Pendiente,
    Listo,
    Entregado,
}

impl OrderStatus {
    /// Wire/query value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendiente => "Pendiente",
            Self::Listo => "Listo",
            Self::Entregado => "Entregado",
        }
    }

    /// Next status in the kitchen flow, `None` once delivered
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            Self::Pendiente => Some(Self::Listo),
            Self::Listo => Some(Self::Entregado),
            Self::Entregado => None,
        }
    }

    /// Whether `to` is the status directly after this one
    pub fn can_transition_to(&self, to: OrderStatus) -> bool {
        self.next() == Some(to)
    }

    /// Label of the button that moves an order out of this status
    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            Self::Pendiente => Some("Marcar listo"),
            Self::Listo => Some("Marcar entregado"),
            Self::Entregado => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pendiente" => Ok(Self::Pendiente),
            "listo" => Ok(Self::Listo),
            "entregado" => Ok(Self::Entregado),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Order line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Menu item reference
    #[serde(deserialize_with = "super::id_format::deserialize")]
    pub menu_item_id: String,
    pub menu_item_name: String,
    /// Unit price in soles at the time of ordering
    pub price: Decimal,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderItem {
    /// Line subtotal: price × quantity
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "super::id_format::deserialize")]
    pub id: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
    /// Set by the backend once a payment settles the order
    #[serde(default)]
    pub paid: bool,
}

impl Order {
    /// Order total: Σ price × quantity
    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    /// Number of dishes across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Short display id (last 6 characters)
    pub fn short_id(&self) -> &str {
        let start = self
            .id
            .char_indices()
            .rev()
            .nth(5)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.id[start..]
    }
}

/// Keep only orders in the given status
pub fn filter_by_status(orders: Vec<Order>, status: OrderStatus) -> Vec<Order> {
    orders.into_iter().filter(|o| o.status == status).collect()
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub items: Vec<OrderItem>,
}

/// Status update payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}
