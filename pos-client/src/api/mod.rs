//! Typed backend endpoints
//!
//! One `impl HttpClient` block per resource. Paths are relative to the
//! configured base URL.

pub mod auth;
pub mod finance;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod payments;
