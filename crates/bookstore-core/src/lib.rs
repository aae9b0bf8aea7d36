//! # bookstore-core: Pure Domain Logic for the Bookstore
//!
//! Entity types and business rules with zero I/O dependencies. Storage lives
//! in `bookstore-store`, orchestration in `bookstore-service`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstore Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 bookstore-service                               │   │
//! │  │    register_user, add_to_cart, checkout, process_payment ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bookstore-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │   Book    │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │  Payment  │  │           │  │ CartItem  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              bookstore-store (in-memory Store)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity types (User, Book, Order, Payment, ...)
//! - [`cart`] - Cart and line-item accumulation
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`session`] - Session contract types for a future auth layer
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstore_core::money::Money;
//!
//! let price = Money::from_cents(1000); // $10.00
//! let line_total = price.checked_times(3);
//! assert_eq!(line_total, Some(Money::from_cents(3000)));
//! ```

pub mod cart;
pub mod error;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

pub use cart::{Cart, CartItem};
pub use error::{ErrorKind, ShopError, ShopResult, ValidationError};
pub use money::Money;
pub use types::*;

/// Lowest accepted review rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted review rating.
pub const MAX_RATING: u8 = 5;
