//! Inventory view: supplies (insumos) and purchases

use shared::validation::{self, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, ValidationError};
use shared::{Decimal, NewSupply, Supply, SupplyPurchase, low_stock};

use crate::{ClientResult, HttpClient};

/// New supply form state
#[derive(Debug, Clone, Default)]
pub struct SupplyForm {
    pub name: String,
    pub unit: String,
    pub min_stock: Decimal,
    pub current_stock: Decimal,
}

impl SupplyForm {
    pub fn to_payload(&self) -> Result<NewSupply, ValidationError> {
        let name = self.name.trim();
        let unit = self.unit.trim();
        validation::validate_required_text(name, "name", MAX_NAME_LEN)?;
        validation::validate_required_text(unit, "unit", MAX_SHORT_TEXT_LEN)?;
        validation::validate_non_negative(self.min_stock, "min_stock")?;
        validation::validate_non_negative(self.current_stock, "current_stock")?;
        Ok(NewSupply {
            name: name.to_string(),
            unit: unit.to_string(),
            min_stock: self.min_stock,
            current_stock: self.current_stock,
        })
    }
}

/// Purchase form state
#[derive(Debug, Clone, Default)]
pub struct PurchaseForm {
    pub supply_id: String,
    pub quantity: Decimal,
    pub cost: Option<Decimal>,
}

impl PurchaseForm {
    pub fn to_payload(&self) -> Result<SupplyPurchase, ValidationError> {
        let supply_id = self.supply_id.trim();
        if supply_id.is_empty() {
            return Err(ValidationError::required("supplyId"));
        }
        validation::validate_positive(self.quantity, "quantity")?;
        if let Some(cost) = self.cost {
            validation::validate_non_negative(cost, "cost")?;
        }
        Ok(SupplyPurchase {
            supply_id: supply_id.to_string(),
            quantity: self.quantity,
            cost: self.cost,
        })
    }
}

pub struct InventoryView {
    client: HttpClient,
    supplies: Vec<Supply>,
}

impl InventoryView {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            supplies: Vec::new(),
        }
    }

    /// Fetch supplies
    pub async fn mount(&mut self) -> ClientResult<&[Supply]> {
        self.supplies = self.client.list_supplies().await?;
        let low = low_stock(&self.supplies).len();
        if low > 0 {
            tracing::warn!(count = low, "Supplies at or below minimum stock");
        }
        Ok(&self.supplies)
    }

    pub fn supplies(&self) -> &[Supply] {
        &self.supplies
    }

    pub fn low_stock(&self) -> Vec<&Supply> {
        low_stock(&self.supplies)
    }

    pub async fn create_supply(&mut self, form: &SupplyForm) -> ClientResult<Supply> {
        let payload = form.to_payload()?;
        if self
            .supplies
            .iter()
            .any(|s| s.name.to_lowercase() == payload.name.to_lowercase())
        {
            return Err(ValidationError::invalid(
                "name",
                format!("a supply named '{}' already exists", payload.name),
            )
            .into());
        }
        let created = self.client.create_supply(&payload).await?;
        tracing::info!(supply_id = %created.id, name = %created.name, "Supply created");
        self.supplies.push(created.clone());
        self.reload().await;
        Ok(created)
    }

    /// Register a purchase of a listed supply, then re-fetch
    pub async fn register_purchase(&mut self, form: &PurchaseForm) -> ClientResult<Supply> {
        let payload = form.to_payload()?;
        if !self.supplies.iter().any(|s| s.id == payload.supply_id) {
            return Err(ValidationError::invalid(
                "supplyId",
                format!("{} is not a listed supply", payload.supply_id),
            )
            .into());
        }
        let updated = self.client.register_purchase(&payload).await?;
        let operator = self.client.auth().operator().await;
        audit_log!(
            operator,
            "purchase",
            format!("supply:{}", payload.supply_id),
            format!("+{} {}", payload.quantity, updated.unit)
        );
        if let Some(local) = self.supplies.iter_mut().find(|s| s.id == updated.id) {
            *local = updated.clone();
        }
        self.reload().await;
        Ok(updated)
    }

    /// Re-fetch after a submit; on failure the patched local list stays
    async fn reload(&mut self) {
        if let Err(e) = self.mount().await {
            tracing::warn!(error = %e, "Supply list refresh failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supply_form_validation() {
        let mut form = SupplyForm {
            name: " Limón ".to_string(),
            unit: "kg".to_string(),
            min_stock: Decimal::new(5, 0),
            current_stock: Decimal::ZERO,
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.name, "Limón");

        form.unit = String::new();
        assert_eq!(form.to_payload().unwrap_err().field(), "unit");

        form.unit = "kg".to_string();
        form.min_stock = Decimal::new(-1, 0);
        assert_eq!(form.to_payload().unwrap_err().field(), "min_stock");
    }

    #[test]
    fn test_purchase_form_validation() {
        let mut form = PurchaseForm {
            supply_id: "s1".to_string(),
            quantity: Decimal::new(3, 0),
            cost: Some(Decimal::new(24, 0)),
        };
        assert!(form.to_payload().is_ok());

        form.quantity = Decimal::ZERO;
        assert_eq!(form.to_payload().unwrap_err().field(), "quantity");

        form.quantity = Decimal::ONE;
        form.cost = Some(Decimal::new(-5, 0));
        assert_eq!(form.to_payload().unwrap_err().field(), "cost");

        form.supply_id = "  ".to_string();
        assert_eq!(form.to_payload().unwrap_err().field(), "supplyId");
    }
}
