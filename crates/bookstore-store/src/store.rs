//! # Store
//!
//! The in-memory entity store.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Store                                      │
//! │                                                                         │
//! │  ids: IdGenerator ─── next() ──► 1, 2, 3, ...  (shared by ALL types)   │
//! │                                                                         │
//! │  users      : Vec<User>        categories : Vec<Category>              │
//! │  books      : Vec<Book>        carts      : Vec<Cart>                  │
//! │  orders     : Vec<Order>       payments   : Vec<Payment>               │
//! │  reviews    : Vec<Review>                                               │
//! │                                                                         │
//! │  Each Vec is in creation order. Lookups are linear scans.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entities are never deleted one by one; [`Store::reset`] drops everything
//! and restarts the sequence.

use tracing::debug;

use bookstore_core::{Book, Cart, Category, EntityId, Order, Payment, Review, User};

// =============================================================================
// Id Generator
// =============================================================================

/// Hands out store-wide identifiers, starting at 1.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub const FIRST: u64 = 1;

    pub fn new() -> Self {
        IdGenerator { next: Self::FIRST }
    }

    /// Returns the next id and advances the sequence.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId::new(self.next);
        self.next += 1;
        id
    }

    /// Restarts the sequence at 1.
    pub fn reset(&mut self) {
        self.next = Self::FIRST;
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Store
// =============================================================================

/// Owns every entity of the bookstore.
///
/// Create operations return a copy of what was stored; callers mutate
/// through the update operations only.
#[derive(Debug, Default)]
pub struct Store {
    pub(crate) ids: IdGenerator,
    pub(crate) users: Vec<User>,
    pub(crate) categories: Vec<Category>,
    pub(crate) books: Vec<Book>,
    pub(crate) carts: Vec<Cart>,
    pub(crate) orders: Vec<Order>,
    pub(crate) payments: Vec<Payment>,
    pub(crate) reviews: Vec<Review>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the next id from the store-wide sequence.
    ///
    /// Used directly for entities the store does not create itself, such as
    /// cart line items.
    pub fn next_id(&mut self) -> EntityId {
        self.ids.next_id()
    }

    /// Drops every entity and restarts the id sequence at 1.
    pub fn reset(&mut self) {
        debug!("Resetting store");

        self.users.clear();
        self.categories.clear();
        self.books.clear();
        self.carts.clear();
        self.orders.clear();
        self.payments.clear();
        self.reviews.clear();
        self.ids.reset();
    }
}
