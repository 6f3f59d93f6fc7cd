//! Data models
//!
//! Transient client-side views of backend-owned entities.
//! JSON field names follow the backend exactly: orders and finance use
//! camelCase, supplies use snake_case.

pub mod expense;
pub mod finance;
pub mod menu;
pub mod order;
pub mod payment;
pub mod supply;

// Re-exports
pub use expense::*;
pub use finance::*;
pub use menu::*;
pub use order::*;
pub use payment::*;
pub use supply::*;

/// Entity ids arrive as strings from some endpoints and as integers from
/// others; both are held as `String`.
pub(crate) mod id_format {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        })
    }
}
