//! Client error types

use shared::{OrderStatus, ValidationError};
use thiserror::Error;

/// Client error type
///
/// Every variant is shown to the operator as an alert; nothing is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Form or request rejected
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend failure
    #[error("Internal error: {0}")]
    Internal(String),

    /// Status change outside `Pendiente → Listo → Entregado`
    #[error("Cannot move order {order_id} from {from} to {to}")]
    InvalidTransition {
        order_id: String,
        from: OrderStatus,
        to: String,
    },

    /// Bad client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl ClientError {
    /// Rejected by a local form check or by the backend as invalid input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidTransition { .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
