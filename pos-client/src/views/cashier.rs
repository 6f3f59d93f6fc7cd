//! Cashier view
//!
//! Lists delivered orders still awaiting payment and settles them.

use chrono::Utc;
use shared::{Decimal, Order, OrderStatus, Payment, PaymentMethod, filter_by_status};

use crate::receipt::ReceiptRenderer;
use crate::{ClientError, ClientResult, HttpClient};

pub struct CashierView {
    client: HttpClient,
    orders: Vec<Order>,
}

impl CashierView {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            orders: Vec::new(),
        }
    }

    /// Fetch delivered, unpaid orders
    pub async fn mount(&mut self) -> ClientResult<&[Order]> {
        let delivered = self.client.list_orders(OrderStatus::Entregado).await?;
        self.orders = filter_by_status(delivered, OrderStatus::Entregado)
            .into_iter()
            .filter(|o| !o.paid)
            .collect();
        Ok(&self.orders)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn find(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Total to charge for a listed order
    pub fn total(&self, order_id: &str) -> ClientResult<Decimal> {
        self.find(order_id)
            .map(Order::total)
            .ok_or_else(|| not_listed(order_id))
    }

    /// Charge a listed order and re-fetch the list
    ///
    /// Once the backend records the payment the call succeeds; a failed
    /// re-fetch only leaves the local list as it was, minus this order.
    ///
    /// Cash payments need the amount received; change is computed before
    /// anything is sent. Yape payments ignore `received`.
    pub async fn checkout(
        &mut self,
        order_id: &str,
        method: PaymentMethod,
        received: Option<Decimal>,
    ) -> ClientResult<Payment> {
        let total = self.total(order_id)?;
        let payment = match method {
            PaymentMethod::Cash => {
                let received = received.ok_or_else(|| {
                    ClientError::Validation("received must not be empty".to_string())
                })?;
                Payment::cash(order_id, total, received)?
            }
            PaymentMethod::Yape => Payment::yape(order_id, total),
        };

        let recorded = self.client.create_payment(&payment).await?;
        let operator = self.client.auth().operator().await;
        audit_log!(
            operator,
            "payment",
            format!("order:{order_id}"),
            format!("{} {}", payment.method, payment.amount)
        );
        // Settled on the backend even if the re-fetch below fails
        self.orders.retain(|o| o.id != order_id);
        if let Err(e) = self.mount().await {
            tracing::warn!(error = %e, "Cashier list refresh failed after payment");
        }
        Ok(recorded)
    }

    /// Boleta text for a settled order
    pub fn receipt(&self, business_name: &str, order: &Order, payment: &Payment) -> String {
        ReceiptRenderer::new(business_name, order, payment).render(Utc::now())
    }
}

fn not_listed(order_id: &str) -> ClientError {
    ClientError::NotFound(format!("order {order_id} is not awaiting payment"))
}
