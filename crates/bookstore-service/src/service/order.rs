//! # Order Cancellation

use tracing::info;

use super::BookShoppingService;
use bookstore_core::{EntityId, ShopError, ShopResult, ValidationError};

impl BookShoppingService {
    /// Returns an order's quantity to stock.
    ///
    /// The order record and any payment for it are left as they are, so
    /// cancelling the same order twice restocks twice.
    ///
    /// ## Errors
    /// - `OrderNotFound` if the order does not exist
    /// - `BookNotFound` if the ordered book has disappeared
    /// - `Validation` if the restocked level would overflow
    pub fn cancel_order(&self, order_id: EntityId) -> ShopResult<bool> {
        self.store.write(|store| {
            let order = store
                .get_order_by_id(order_id)
                .ok_or(ShopError::OrderNotFound(order_id))?;
            let book = store
                .get_book_by_id(order.book_id)
                .ok_or(ShopError::BookNotFound(order.book_id))?;

            let restocked = book
                .stock_quantity
                .checked_add(order.quantity)
                .ok_or_else(|| ValidationError::OutOfRange {
                    field: "stock_quantity".to_string(),
                    min: 0,
                    max: i64::MAX,
                })?;
            store.update_book_stock(book.id, restocked);

            info!(%order_id, book_id = %book.id, stock = restocked, "Order cancelled");
            Ok(true)
        })
    }
}
