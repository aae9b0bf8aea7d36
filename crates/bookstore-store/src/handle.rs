//! # Store Handle
//!
//! Shared access to one [`Store`].
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. The service and its payment settlement tasks all touch the same store
//! 2. A multi-step operation (checkout) must see no interleaving writes
//! 3. Settlement tasks may run on another thread of the runtime
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BookShoppingService ──┐                                                │
//! │                        ├──► StoreHandle::write(|store| { ... }) ──► Store│
//! │  settlement task ──────┘        (one lock per operation)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every closure passed to [`StoreHandle::write`] runs to completion under
//! the lock, so a validate-then-mutate sequence inside one closure is atomic.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::store::Store;

/// Cloneable handle to a shared [`Store`].
#[derive(Debug, Clone, Default)]
pub struct StoreHandle {
    inner: Arc<Mutex<Store>>,
}

impl StoreHandle {
    /// Wraps an existing store.
    pub fn new(store: Store) -> Self {
        StoreHandle {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use bookstore_core::EntityId;
    /// use bookstore_store::StoreHandle;
    ///
    /// let handle = StoreHandle::default();
    /// let book = handle.read(|store| store.get_book_by_id(EntityId::new(1)));
    /// assert!(book.is_none());
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.lock();
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.lock();
        f(&mut store)
    }

    /// Acquires the lock, recovering the guard if a previous holder panicked.
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
