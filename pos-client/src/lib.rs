//! POS Client - views over the restaurant backend API
//!
//! Provides a thin HTTP client, the auth session shared by every request,
//! and one controller per screen: order entry, kitchen board, cashier,
//! dashboard, inventory and login.

#[macro_use]
mod audit;

pub mod api;
pub mod cart;
pub mod config;
pub mod error;
pub mod http;
pub mod receipt;
pub mod session;
pub mod views;

pub use cart::Cart;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{AuthContext, Session};
pub use views::kitchen::{KitchenPoller, KitchenSnapshot};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, UserInfo};
pub use shared::models::*;
