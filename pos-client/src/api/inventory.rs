//! Inventory API

use shared::{NewSupply, Supply, SupplyPurchase};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List supplies
    pub async fn list_supplies(&self) -> ClientResult<Vec<Supply>> {
        self.get("/inventory/supplies").await
    }

    pub async fn create_supply(&self, supply: &NewSupply) -> ClientResult<Supply> {
        self.post("/inventory/supplies", supply).await
    }

    /// Register a purchase; returns the supply with its increased stock
    pub async fn register_purchase(&self, purchase: &SupplyPurchase) -> ClientResult<Supply> {
        self.post("/inventory/purchases", purchase).await
    }
}
