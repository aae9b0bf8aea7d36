//! # Catalog Repository
//!
//! Categories and books.

use tracing::debug;

use crate::store::Store;
use bookstore_core::{Book, Category, EntityId, NewBook, NewCategory};

impl Store {
    pub fn create_category(&mut self, data: NewCategory) -> Category {
        let category = data.into_category(self.ids.next_id());
        debug!(id = %category.id, name = %category.name, "Inserting category");

        self.categories.push(category.clone());
        category
    }

    pub fn get_category_by_id(&self, id: EntityId) -> Option<Category> {
        self.categories.iter().find(|c| c.id == id).cloned()
    }

    /// Creates a book. The category reference is checked by the caller.
    pub fn create_book(&mut self, data: NewBook) -> Book {
        let book = data.into_book(self.ids.next_id());
        debug!(id = %book.id, title = %book.title, stock = book.stock_quantity, "Inserting book");

        self.books.push(book.clone());
        book
    }

    pub fn get_book_by_id(&self, id: EntityId) -> Option<Book> {
        self.books.iter().find(|b| b.id == id).cloned()
    }

    /// All books in creation order.
    pub fn list_books(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// Sets a book's stock level directly.
    ///
    /// No floor or ceiling is applied here; the service guarantees the new
    /// value is sensible.
    ///
    /// ## Returns
    /// `true` if the book existed.
    pub fn update_book_stock(&mut self, book_id: EntityId, new_stock: i64) -> bool {
        match self.books.iter_mut().find(|b| b.id == book_id) {
            Some(book) => {
                debug!(id = %book_id, from = book.stock_quantity, to = new_stock, "Updating stock");
                book.stock_quantity = new_stock;
                true
            }
            None => false,
        }
    }
}
