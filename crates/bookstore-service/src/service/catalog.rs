//! # Catalog
//!
//! Categories and books.

use tracing::{debug, info};

use super::BookShoppingService;
use bookstore_core::validation::{validate_price_cents, validate_stock_quantity};
use bookstore_core::{Book, Category, NewBook, NewCategory, ShopError, ShopResult};

impl BookShoppingService {
    pub fn create_category(&self, data: NewCategory) -> Category {
        let category = self.store.write(|store| store.create_category(data));
        debug!(category_id = %category.id, name = %category.name, "Category created");
        category
    }

    /// Adds a book to an existing category.
    ///
    /// ## Errors
    /// - `Validation` for a negative price or stock
    /// - `CategoryNotFound` if the category does not exist
    pub fn create_book(&self, data: NewBook) -> ShopResult<Book> {
        validate_price_cents(data.price.cents())?;
        validate_stock_quantity(data.stock_quantity)?;

        self.store.write(|store| {
            if store.get_category_by_id(data.category_id).is_none() {
                return Err(ShopError::CategoryNotFound(data.category_id));
            }

            let book = store.create_book(data);
            info!(
                book_id = %book.id,
                title = %book.title,
                stock = book.stock_quantity,
                "Book added to catalog"
            );
            Ok(book)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::service::fixtures::{fixture, new_book};
    use bookstore_core::{EntityId, ShopError};

    #[test]
    fn test_create_book_requires_category() {
        let f = fixture();

        let err = f
            .service
            .create_book(new_book("Orphan", 500, 1, EntityId::new(999)))
            .unwrap_err();
        assert!(matches!(err, ShopError::CategoryNotFound(id) if id == EntityId::new(999)));
    }

    #[test]
    fn test_create_book_validates_price_and_stock() {
        let f = fixture();

        let err = f
            .service
            .create_book(new_book("Negative", -1, 1, f.category.id))
            .unwrap_err();
        assert!(matches!(err, ShopError::Validation(_)));

        let err = f
            .service
            .create_book(new_book("Negative", 100, -1, f.category.id))
            .unwrap_err();
        assert!(matches!(err, ShopError::Validation(_)));

        let free = f
            .service
            .create_book(new_book("Free", 0, 0, f.category.id))
            .unwrap();
        assert!(free.price.is_zero());
    }

    #[test]
    fn test_ids_are_shared_across_entities() {
        let f = fixture();
        // category, book and user drew 1, 2 and 3
        assert_eq!(f.category.id, EntityId::new(1));
        assert_eq!(f.book.id, EntityId::new(2));
        assert_eq!(f.user.id, EntityId::new(3));
    }
}
