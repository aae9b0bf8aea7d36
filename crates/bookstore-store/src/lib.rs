//! # bookstore-store: In-Memory Store for the Bookstore
//!
//! Holds every entity in memory, keyed by one store-wide id sequence.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstore Data Flow                              │
//! │                                                                         │
//! │  BookShoppingService (checkout)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bookstore-store (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  StoreHandle  │    │     Store     │    │ Repositories │  │   │
//! │  │   │  (handle.rs)  │───►│  (store.rs)   │◄───│  (impl Store)│  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Arc<Mutex<>>  │    │ IdGenerator   │    │ user.rs      │  │   │
//! │  │   │ read / write  │    │ Vec<Book> ... │    │ catalog.rs   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `Store` and its id sequence
//! - [`handle`] - Shared handle used by services and background tasks
//! - [`repository`] - Per-entity create / lookup / update operations
//!
//! ## Usage
//!
//! ```rust
//! use bookstore_core::NewCategory;
//! use bookstore_store::Store;
//!
//! let mut store = Store::new();
//! let science = store.create_category(NewCategory {
//!     name: "Science".to_string(),
//!     description: "Science books".to_string(),
//! });
//! assert_eq!(store.get_category_by_id(science.id), Some(science));
//! ```

pub mod handle;
pub mod repository;
pub mod store;

pub use handle::StoreHandle;
pub use store::{IdGenerator, Store};
