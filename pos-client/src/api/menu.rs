//! Menu API

use shared::MenuItem;

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// List menu items
    pub async fn list_menu(&self) -> ClientResult<Vec<MenuItem>> {
        self.get("/menu").await
    }
}
