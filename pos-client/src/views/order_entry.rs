//! Menu / order entry view

use shared::{MenuItem, Order};
use shared::validation::ValidationError;

use crate::{Cart, ClientResult, HttpClient};

pub struct OrderEntryView {
    client: HttpClient,
    menu: Vec<MenuItem>,
    cart: Cart,
}

impl OrderEntryView {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            menu: Vec::new(),
            cart: Cart::new(),
        }
    }

    /// Fetch the menu
    pub async fn mount(&mut self) -> ClientResult<&[MenuItem]> {
        self.menu = self.client.list_menu().await?;
        tracing::debug!(items = self.menu.len(), "Menu loaded");
        Ok(&self.menu)
    }

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Add a loaded menu item to the cart by id
    pub fn add(&mut self, menu_item_id: &str, quantity: u32) -> Result<(), ValidationError> {
        let item = self
            .menu
            .iter()
            .find(|m| m.id == menu_item_id)
            .ok_or_else(|| {
                ValidationError::invalid("menuItemId", format!("{menu_item_id} is not on the menu"))
            })?;
        self.cart.add(item, quantity)
    }

    /// Submit the cart as a new order
    ///
    /// The cart is cleared only when the backend accepts the order.
    pub async fn submit(&mut self) -> ClientResult<Order> {
        self.cart.validate()?;
        let order = self.client.create_order(self.cart.lines().to_vec()).await?;
        tracing::info!(
            order_id = %order.id,
            lines = order.items.len(),
            total = %order.total(),
            "Order submitted"
        );
        self.cart.clear();
        Ok(order)
    }
}
