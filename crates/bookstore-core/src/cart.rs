//! # Cart
//!
//! A user's shopping cart and its line items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Service Call             Cart Method              State Change         │
//! │  ────────────             ───────────              ────────────         │
//! │                                                                         │
//! │  add_to_cart (new book) ─► add_item() ───────────► items.push(item)    │
//! │                                                                         │
//! │  add_to_cart (same book) ► add_item() ───────────► items[i].qty += n   │
//! │                                                                         │
//! │  checkout ───────────────► clear() ──────────────► items.clear()       │
//! │                                                                         │
//! │  Stock is only CHECKED here. It is consumed at checkout.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ShopError, ShopResult};
use crate::types::{Book, EntityId};

/// A line in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: EntityId,
    pub book_id: EntityId,
    /// Always > 0.
    pub quantity: i64,
}

/// The shopping cart of one user.
///
/// ## Invariants
/// - At most one cart per user (enforced by the service)
/// - Items are unique by `book_id`; adding the same book again increases
///   the quantity of the existing line
/// - A line's quantity never exceeds the book's stock at the time it was set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: EntityId,
    pub user_id: EntityId,
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new(id: EntityId, user_id: EntityId) -> Self {
        Cart {
            id,
            user_id,
            items: Vec::new(),
        }
    }

    /// Adds `quantity` units of `book`, merging with an existing line.
    ///
    /// ## Behavior
    /// - Book already in cart: the line becomes `existing + quantity`,
    ///   rejected with [`ShopError::QuantityExceedsStock`] if that sum is
    ///   larger than `book.stock_quantity`
    /// - Book not in cart: a new line is appended; `next_item_id` is only
    ///   called in this case
    ///
    /// The caller has already checked `quantity` on its own against stock.
    pub fn add_item<F>(&mut self, book: &Book, quantity: i64, next_item_id: F) -> ShopResult<()>
    where
        F: FnOnce() -> EntityId,
    {
        if let Some(item) = self.items.iter_mut().find(|i| i.book_id == book.id) {
            return match item.quantity.checked_add(quantity) {
                Some(new_qty) if book.has_stock_for(new_qty) => {
                    item.quantity = new_qty;
                    Ok(())
                }
                // An overflowing sum is above any stock level.
                _ => Err(ShopError::QuantityExceedsStock {
                    title: book.title.clone(),
                    available: book.stock_quantity,
                    requested: item.quantity.saturating_add(quantity),
                }),
            };
        }

        self.items.push(CartItem {
            id: next_item_id(),
            book_id: book.id,
            quantity,
        });
        Ok(())
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct books in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    /// Saturates at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |total, i| total.saturating_add(i.quantity))
    }
}
