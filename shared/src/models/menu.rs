//! Menu Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(deserialize_with = "super::id_format::deserialize")]
    pub id: String,
    pub name: String,
    /// Unit price in soles
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Items the kitchen ran out of stay listed but cannot be ordered
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: None,
            available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_minimal_payload() {
        let item: MenuItem =
            serde_json::from_str(r#"{"id":"m1","name":"Lomo saltado","price":25.5}"#).unwrap();
        assert_eq!(item.price, Decimal::new(255, 1));
        assert!(item.available);
        assert!(item.category.is_none());
    }

    #[test]
    fn test_menu_item_numeric_id() {
        let item: MenuItem =
            serde_json::from_str(r#"{"id":7,"name":"Chicha","price":6,"available":false}"#)
                .unwrap();
        assert_eq!(item.id, "7");
        assert!(!item.available);
    }
}
