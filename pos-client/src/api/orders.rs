//! Orders API

use shared::{NewOrder, Order, OrderItem, OrderStatus, StatusUpdate};

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Submit a new order
    pub async fn create_order(&self, items: Vec<OrderItem>) -> ClientResult<Order> {
        self.post("/orders", &NewOrder { items }).await
    }

    /// List orders in one status
    pub async fn list_orders(&self, status: OrderStatus) -> ClientResult<Vec<Order>> {
        self.get_query("/orders", &[("status", status.as_str())])
            .await
    }

    /// Move an order to another status
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> ClientResult<Order> {
        self.patch(&format!("/orders/{order_id}/status"), &StatusUpdate { status })
            .await
    }
}
