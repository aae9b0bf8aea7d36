//! # bookstore-service: Bookstore Operations
//!
//! Validation and orchestration on top of the in-memory store.
//!
//! ## Module Organization
//! ```text
//! bookstore_service/
//! ├── lib.rs          ◄─── You are here
//! ├── service/
//! │   ├── mod.rs      ◄─── BookShoppingService, read accessors
//! │   ├── account.rs  ◄─── register_user, login_user
//! │   ├── catalog.rs  ◄─── create_category, create_book
//! │   ├── cart.rs     ◄─── add_to_cart, checkout
//! │   ├── order.rs    ◄─── cancel_order
//! │   ├── payment.rs  ◄─── process_payment, settlement tasks
//! │   └── review.rs   ◄─── create_review, get_book_reviews
//! ├── config.rs       ◄─── ShopConfig (TOML + env overrides)
//! └── telemetry.rs    ◄─── tracing subscriber setup
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::{Money, NewBook, NewCategory};
//! use bookstore_service::BookShoppingService;
//! use bookstore_store::StoreHandle;
//!
//! let service = BookShoppingService::new(StoreHandle::default());
//! let science = service.create_category(NewCategory {
//!     name: "Science".to_string(),
//!     description: "Science books".to_string(),
//! });
//! let book = service
//!     .create_book(NewBook {
//!         title: "Cosmos".to_string(),
//!         author: "Carl Sagan".to_string(),
//!         publisher: "Random House".to_string(),
//!         isbn: "0394502949".to_string(),
//!         price: Money::from_cents(1000),
//!         stock_quantity: 10,
//!         description: String::new(),
//!         category_id: science.id,
//!     })
//!     .unwrap();
//! assert_eq!(book.category_id, science.id);
//! ```

pub mod config;
pub mod service;
pub mod telemetry;

pub use config::{ConfigError, PaymentSettings, ShopConfig};
pub use service::payment::{FixedOutcome, PaymentGateway, PaymentSettlement, SimulatedGateway};
pub use service::BookShoppingService;
