//! # Book Shopping Service
//!
//! The operations a storefront calls. Each method validates its arguments
//! before touching the store, then runs its reads and writes inside a single
//! [`StoreHandle::write`] so the whole operation sees one consistent state.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Purchase Flow                                       │
//! │                                                                         │
//! │  register_user ──► add_to_cart ──► checkout ──► process_payment         │
//! │                        │               │              │                 │
//! │                        ▼               ▼              ▼                 │
//! │                  stock checked    orders created   pending payment      │
//! │                  (not consumed)   stock decremented  settles later      │
//! │                                        │                                │
//! │                                        └──► cancel_order (restock)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod account;
pub mod cart;
pub mod catalog;
pub mod order;
pub mod payment;
pub mod review;

use std::sync::Arc;

use bookstore_core::{Book, Cart, EntityId, Order};
use bookstore_store::StoreHandle;

use crate::config::ShopConfig;
use payment::{PaymentGateway, SimulatedGateway};

/// Entry point for every bookstore operation.
///
/// Cloning is cheap; clones share the same store and gateway.
#[derive(Clone)]
pub struct BookShoppingService {
    store: StoreHandle,
    config: ShopConfig,
    gateway: Arc<dyn PaymentGateway>,
}

impl BookShoppingService {
    /// Creates a service with the default configuration.
    pub fn new(store: StoreHandle) -> Self {
        Self::with_config(store, ShopConfig::default())
    }

    /// Creates a service whose payments settle through a [`SimulatedGateway`]
    /// using the configured success rate.
    pub fn with_config(store: StoreHandle, config: ShopConfig) -> Self {
        let gateway = Arc::new(SimulatedGateway::new(config.payment.success_rate));
        BookShoppingService {
            store,
            config,
            gateway,
        }
    }

    /// Replaces the payment gateway.
    pub fn with_gateway(mut self, gateway: impl PaymentGateway + 'static) -> Self {
        self.gateway = Arc::new(gateway);
        self
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    pub fn get_book(&self, book_id: EntityId) -> Option<Book> {
        self.store.read(|store| store.get_book_by_id(book_id))
    }

    /// The user's cart, if one has been created by `add_to_cart`.
    pub fn get_cart(&self, user_id: EntityId) -> Option<Cart> {
        self.store.read(|store| store.get_cart_by_user_id(user_id))
    }

    pub fn get_order(&self, order_id: EntityId) -> Option<Order> {
        self.store.read(|store| store.get_order_by_id(order_id))
    }
}

impl std::fmt::Debug for BookShoppingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookShoppingService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Shared setup: one category, one book, one registered user.

    use super::*;
    use crate::service::payment::FixedOutcome;
    use bookstore_core::{Category, Money, NewBook, NewCategory, NewUser, PaymentStatus, Role, User};

    pub(crate) struct Fixture {
        pub service: BookShoppingService,
        pub category: Category,
        pub book: Book,
        pub user: User,
    }

    pub(crate) fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "password".to_string(),
            email: format!("{}@example.com", username),
            full_name: "Test User".to_string(),
            address: "1 Library Lane".to_string(),
            phone: "555-0100".to_string(),
            role: Role::User,
        }
    }

    pub(crate) fn new_book(title: &str, price_cents: i64, stock: i64, category_id: EntityId) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Test Author".to_string(),
            publisher: "Test Publisher".to_string(),
            isbn: "1234567890".to_string(),
            price: Money::from_cents(price_cents),
            stock_quantity: stock,
            description: "A book for testing".to_string(),
            category_id,
        }
    }

    /// "Test Book" at $10.00 with 10 in stock, and user "testUser".
    pub(crate) fn fixture() -> Fixture {
        let service = BookShoppingService::new(StoreHandle::default())
            .with_gateway(FixedOutcome(PaymentStatus::Completed));

        let category = service.create_category(NewCategory {
            name: "Science".to_string(),
            description: "Science books".to_string(),
        });
        let book = service
            .create_book(new_book("Test Book", 1000, 10, category.id))
            .unwrap();
        let user = service.register_user(new_user("testUser")).unwrap();

        Fixture {
            service,
            category,
            book,
            user,
        }
    }
}
