//! Payment Model

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Payment method accepted at the cashier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    #[serde(rename = "efectivo")]
    Cash,
    #[serde(rename = "yape")]
    Yape,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "efectivo",
            Self::Yape => "yape",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => f.write_str("Efectivo"),
            Self::Yape => f.write_str("Yape"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "efectivo" | "cash" => Ok(Self::Cash),
            "yape" => Ok(Self::Yape),
            other => Err(ValidationError::invalid(
                "method",
                format!("unknown payment method '{other}'"),
            )),
        }
    }
}

/// Payment record submitted when the cashier settles an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(deserialize_with = "super::id_format::deserialize")]
    pub order_id: String,
    /// Amount charged, always the order total
    pub amount: Decimal,
    pub method: PaymentMethod,
    /// Cash handed over by the customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<Decimal>,
}

impl Payment {
    /// Cash payment; fails when the customer hands over less than the total
    pub fn cash(
        order_id: impl Into<String>,
        amount: Decimal,
        received: Decimal,
    ) -> Result<Self, ValidationError> {
        let change = cash_change(amount, received)?;
        Ok(Self {
            order_id: order_id.into(),
            amount,
            method: PaymentMethod::Cash,
            received: Some(received),
            change: Some(change),
        })
    }

    /// Yape transfer for the exact amount
    pub fn yape(order_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            order_id: order_id.into(),
            amount,
            method: PaymentMethod::Yape,
            received: None,
            change: None,
        }
    }
}

/// Change to return: `received − total`
pub fn cash_change(total: Decimal, received: Decimal) -> Result<Decimal, ValidationError> {
    if received < total {
        return Err(ValidationError::invalid(
            "received",
            format!("received {received} is less than total {total}"),
        ));
    }
    Ok(received - total)
}
