//! # Cart Repository

use tracing::debug;

use crate::store::Store;
use bookstore_core::{Cart, EntityId};

impl Store {
    /// Creates an empty cart for `user_id`.
    pub fn create_cart(&mut self, user_id: EntityId) -> Cart {
        let cart = Cart::new(self.ids.next_id(), user_id);
        debug!(id = %cart.id, user_id = %user_id, "Inserting cart");

        self.carts.push(cart.clone());
        cart
    }

    /// Returns the first cart belonging to `user_id`.
    pub fn get_cart_by_user_id(&self, user_id: EntityId) -> Option<Cart> {
        self.carts.iter().find(|c| c.user_id == user_id).cloned()
    }

    /// Replaces the stored cart with the same id. Unknown ids are ignored.
    pub fn update_cart(&mut self, cart: Cart) {
        if let Some(slot) = self.carts.iter_mut().find(|c| c.id == cart.id) {
            debug!(id = %cart.id, items = cart.items.len(), "Updating cart");
            *slot = cart;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::CartItem;

    #[test]
    fn test_create_and_update_cart() {
        let mut store = Store::new();
        let user_id = EntityId::new(50);
        let mut cart = store.create_cart(user_id);
        assert!(cart.is_empty());

        let item_id = store.next_id();
        cart.items.push(CartItem {
            id: item_id,
            book_id: EntityId::new(7),
            quantity: 2,
        });
        store.update_cart(cart.clone());

        let stored = store.get_cart_by_user_id(user_id).unwrap();
        assert_eq!(stored, cart);
        assert_eq!(stored.items[0].quantity, 2);
    }

    #[test]
    fn test_update_unknown_cart_is_noop() {
        let mut store = Store::new();
        let user_id = EntityId::new(50);
        store.create_cart(user_id);

        let stray = Cart::new(EntityId::new(999), user_id);
        store.update_cart(stray);

        assert_eq!(store.get_cart_by_user_id(user_id).unwrap().id.get(), 1);
    }
}
