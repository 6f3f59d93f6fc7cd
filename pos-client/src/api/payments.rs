//! Payments API

use shared::Payment;

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Register a payment; the backend settles the order
    pub async fn create_payment(&self, payment: &Payment) -> ClientResult<Payment> {
        self.post("/payments", payment).await
    }
}
