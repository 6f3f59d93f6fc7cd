//! Cart - local form state of the order entry view
//!
//! Ordered list of line items keyed by menu item id. Lines keep the
//! position of their first insertion.

use shared::validation::{self, MAX_NOTE_LEN, ValidationError};
use shared::{Decimal, MenuItem, OrderItem};

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<OrderItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a menu item; an id already in the cart is merged
    pub fn add(&mut self, item: &MenuItem, quantity: u32) -> Result<(), ValidationError> {
        if !item.available {
            return Err(ValidationError::invalid(
                "menuItemId",
                format!("{} is not available", item.name),
            ));
        }
        validation::validate_quantity(quantity, "quantity")?;

        match self.position(&item.id) {
            Some(idx) => {
                let merged = self.lines[idx].quantity + quantity;
                validation::validate_quantity(merged, "quantity")?;
                self.lines[idx].quantity = merged;
            }
            None => self.lines.push(OrderItem {
                menu_item_id: item.id.clone(),
                menu_item_name: item.name.clone(),
                price: item.price,
                quantity,
                notes: None,
            }),
        }
        Ok(())
    }

    /// Set a line's quantity; 0 removes the line
    pub fn set_quantity(
        &mut self,
        menu_item_id: &str,
        quantity: u32,
    ) -> Result<(), ValidationError> {
        let idx = self
            .position(menu_item_id)
            .ok_or_else(|| not_in_cart(menu_item_id))?;
        if quantity == 0 {
            self.lines.remove(idx);
            return Ok(());
        }
        validation::validate_quantity(quantity, "quantity")?;
        self.lines[idx].quantity = quantity;
        Ok(())
    }

    /// Remove a line; returns it when present
    pub fn remove(&mut self, menu_item_id: &str) -> Option<OrderItem> {
        self.position(menu_item_id).map(|idx| self.lines.remove(idx))
    }

    /// Set or clear a line's kitchen notes
    pub fn set_notes(
        &mut self,
        menu_item_id: &str,
        notes: Option<&str>,
    ) -> Result<(), ValidationError> {
        let idx = self
            .position(menu_item_id)
            .ok_or_else(|| not_in_cart(menu_item_id))?;
        let notes = notes.map(str::trim).filter(|n| !n.is_empty());
        validation::validate_optional_text(notes, "notes", MAX_NOTE_LEN)?;
        self.lines[idx].notes = notes.map(str::to_string);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Σ price × quantity
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(OrderItem::subtotal).sum()
    }

    pub fn lines(&self) -> &[OrderItem] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check the cart before submission
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.lines.is_empty() {
            return Err(ValidationError::invalid("items", "the order has no items"));
        }
        for line in &self.lines {
            validation::validate_quantity(line.quantity, "quantity")?;
            validation::validate_optional_text(line.notes.as_deref(), "notes", MAX_NOTE_LEN)?;
        }
        Ok(())
    }

    fn position(&self, menu_item_id: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.menu_item_id == menu_item_id)
    }
}

fn not_in_cart(menu_item_id: &str) -> ValidationError {
    ValidationError::invalid("menuItemId", format!("{menu_item_id} is not in the order"))
}
