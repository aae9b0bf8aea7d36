//! # Cart & Checkout
//!
//! Adding to a cart only checks stock; checkout is what consumes it.
//!
//! ## Checkout (reserve-then-commit)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  store lock held for the whole operation                                │
//! │                                                                         │
//! │  1. Reserve: for each line                                              │
//! │       book exists?        ── no ──► BookNotFound      (nothing changed) │
//! │       quantity <= stock?  ── no ──► InsufficientStock (nothing changed) │
//! │       total += price × quantity  (overflow ──► Validation)              │
//! │                                                                         │
//! │  2. Commit: for each line                                               │
//! │       create Order, stock -= quantity                                   │
//! │                                                                         │
//! │  3. Clear the cart                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info, warn};

use super::BookShoppingService;
use bookstore_core::validation::validate_quantity;
use bookstore_core::{CheckoutSummary, EntityId, Money, ShopError, ShopResult, ValidationError};

/// A cart line that passed the reserve pass.
struct Reservation {
    book_id: EntityId,
    quantity: i64,
    stock_before: i64,
}

impl BookShoppingService {
    /// Adds `quantity` copies of a book to the user's cart, creating the cart
    /// on first use. Adding a book already in the cart grows its line.
    ///
    /// ## Errors
    /// - `Validation` if `quantity` is not positive
    /// - `BookNotFound` if the book does not exist
    /// - `InsufficientStock` if `quantity` alone exceeds stock
    /// - `QuantityExceedsStock` if the accumulated line would exceed stock
    pub fn add_to_cart(&self, user_id: EntityId, book_id: EntityId, quantity: i64) -> ShopResult<bool> {
        debug!(%user_id, %book_id, quantity, "Adding to cart");
        validate_quantity(quantity)?;

        self.store.write(|store| {
            let book = store
                .get_book_by_id(book_id)
                .ok_or(ShopError::BookNotFound(book_id))?;

            if !book.has_stock_for(quantity) {
                warn!(%book_id, available = book.stock_quantity, requested = quantity, "Not enough stock to add");
                return Err(ShopError::InsufficientStock {
                    title: book.title,
                    available: book.stock_quantity,
                    requested: quantity,
                });
            }

            let mut cart = match store.get_cart_by_user_id(user_id) {
                Some(cart) => cart,
                None => store.create_cart(user_id),
            };

            if let Err(e) = cart.add_item(&book, quantity, || store.next_id()) {
                warn!(%book_id, "Cart line would exceed stock");
                return Err(e);
            }

            store.update_cart(cart);
            Ok(true)
        })
    }

    /// Turns the user's cart into one order per line and empties the cart.
    ///
    /// Either every line becomes an order or nothing changes.
    /// `total_amount` is priced before stock is decremented.
    ///
    /// ## Errors
    /// - `EmptyCart` if the user has no cart or it has no lines
    /// - `BookNotFound` if a line's book has disappeared
    /// - `InsufficientStock` if any line exceeds the current stock
    /// - `Validation` if the total does not fit in `Money`
    pub fn checkout(&self, user_id: EntityId) -> ShopResult<CheckoutSummary> {
        debug!(%user_id, "Checkout started");

        self.store.write(|store| {
            let mut cart = store
                .get_cart_by_user_id(user_id)
                .filter(|cart| !cart.is_empty())
                .ok_or(ShopError::EmptyCart)?;

            let mut reservations = Vec::with_capacity(cart.item_count());
            let mut total_amount = Money::zero();

            for item in &cart.items {
                let book = store
                    .get_book_by_id(item.book_id)
                    .ok_or(ShopError::BookNotFound(item.book_id))?;

                if !book.has_stock_for(item.quantity) {
                    warn!(
                        %user_id,
                        book_id = %book.id,
                        available = book.stock_quantity,
                        requested = item.quantity,
                        "Checkout rejected: insufficient stock"
                    );
                    return Err(ShopError::InsufficientStock {
                        title: book.title,
                        available: book.stock_quantity,
                        requested: item.quantity,
                    });
                }

                total_amount = book
                    .line_total(item.quantity)
                    .and_then(|line| total_amount.checked_add(line))
                    .ok_or_else(|| {
                        warn!(%user_id, book_id = %book.id, "Checkout rejected: total overflows");
                        ValidationError::OutOfRange {
                            field: "total_amount".to_string(),
                            min: 0,
                            max: i64::MAX,
                        }
                    })?;
                reservations.push(Reservation {
                    book_id: book.id,
                    quantity: item.quantity,
                    stock_before: book.stock_quantity,
                });
            }

            let orders = reservations
                .into_iter()
                .map(|r| {
                    let order = store.create_order(r.book_id, r.quantity);
                    store.update_book_stock(r.book_id, r.stock_before - r.quantity);
                    order
                })
                .collect::<Vec<_>>();

            let units = cart.total_quantity();
            cart.clear();
            store.update_cart(cart);

            info!(
                %user_id,
                orders = orders.len(),
                units,
                total = %total_amount,
                "Checkout completed"
            );
            Ok(CheckoutSummary {
                orders,
                total_amount,
            })
        })
    }
}
