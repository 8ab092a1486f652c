use serde::{Deserialize, Serialize};

/// Session key under which the cart is stored.
pub const CART_SESSION_KEY: &str = "cart";

/// One cart line; only the sweet id and quantity persist in the session.
/// Names, prices and stock are resolved against the catalog at render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub sweet_id: i32,
    pub quantity: i32,
}

/// The member's shopping cart, serialized into the cookie session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Add `quantity` units of a sweet, merging with an existing line.
    pub fn add(&mut self, sweet_id: i32, quantity: i32) {
        if quantity < 1 {
            return;
        }
        match self.items.iter_mut().find(|item| item.sweet_id == sweet_id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartItem { sweet_id, quantity }),
        }
    }

    /// Replace the quantity of a line; zero or less removes it.
    pub fn set_quantity(&mut self, sweet_id: i32, quantity: i32) {
        if quantity < 1 {
            self.remove(sweet_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.sweet_id == sweet_id) {
            item.quantity = quantity;
        } else {
            self.items.push(CartItem { sweet_id, quantity });
        }
    }

    pub fn remove(&mut self, sweet_id: i32) {
        self.items.retain(|item| item.sweet_id != sweet_id);
    }

    /// Total number of units across all lines.
    pub fn count(&self) -> i32 {
        self.items
            .iter()
            .fold(0i32, |acc, item| acc.saturating_add(item.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
