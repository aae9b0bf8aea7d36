//! # Repository Module
//!
//! Per-entity operations on the [`Store`](crate::Store).
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Layout                                    │
//! │                                                                         │
//! │  Each file adds one `impl Store` block for one group of entities:      │
//! │                                                                         │
//! │  user.rs     create_user, get_user_by_id, get_user_by_username         │
//! │  catalog.rs  create_category, create_book, update_book_stock, ...      │
//! │  cart.rs     create_cart, get_cart_by_user_id, update_cart             │
//! │  order.rs    create_order, create_payment, update_payment_status, ...  │
//! │  review.rs   create_review, get_reviews_by_book_id                     │
//! │                                                                         │
//! │  Pattern per entity:                                                   │
//! │  • create_*(data without id) → next id, push, return stored copy      │
//! │  • get_*_by_id(id)           → Option<T> (linear scan)                 │
//! │  • update_*                  → in place, reports whether it existed   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod order;
pub mod review;
pub mod user;
