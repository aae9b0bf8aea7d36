//! # Reviews

use tracing::info;

use super::BookShoppingService;
use bookstore_core::validation::validate_rating;
use bookstore_core::{EntityId, Review, ShopError, ShopResult};

impl BookShoppingService {
    /// Records a review.
    ///
    /// ## Errors (checked in this order)
    /// - `InvalidRating` unless 1 ≤ `rating` ≤ 5
    /// - `BookNotFound`
    /// - `UserNotFound`
    pub fn create_review(
        &self,
        user_id: EntityId,
        book_id: EntityId,
        rating: i64,
        comment: impl Into<String>,
    ) -> ShopResult<Review> {
        let rating = validate_rating(rating)?;

        self.store.write(|store| {
            if store.get_book_by_id(book_id).is_none() {
                return Err(ShopError::BookNotFound(book_id));
            }
            if store.get_user_by_id(user_id).is_none() {
                return Err(ShopError::UserNotFound(user_id));
            }

            let review = store.create_review(user_id, book_id, rating, comment);
            info!(review_id = %review.id, %book_id, rating, "Review posted");
            Ok(review)
        })
    }

    /// Reviews of a book, oldest first.
    pub fn get_book_reviews(&self, book_id: EntityId) -> Vec<Review> {
        self.store.read(|store| store.get_reviews_by_book_id(book_id))
    }
}

#[cfg(test)]
mod tests {
    use crate::service::fixtures::fixture;
    use bookstore_core::{EntityId, ShopError};

    #[test]
    fn test_rating_bounds() {
        let f = fixture();

        for rating in [0, 6, -1] {
            let err = f
                .service
                .create_review(f.user.id, f.book.id, rating, "x")
                .unwrap_err();
            assert!(matches!(err, ShopError::InvalidRating(r) if r == rating));
        }

        let low = f.service.create_review(f.user.id, f.book.id, 1, "Meh").unwrap();
        let high = f.service.create_review(f.user.id, f.book.id, 5, "Great").unwrap();
        assert_eq!(low.rating, 1);
        assert_eq!(high.rating, 5);
        assert_eq!(f.service.get_book_reviews(f.book.id), vec![low, high]);
    }

    #[test]
    fn test_rating_checked_before_existence() {
        let f = fixture();
        let err = f
            .service
            .create_review(EntityId::new(998), EntityId::new(999), 9, "x")
            .unwrap_err();
        assert!(matches!(err, ShopError::InvalidRating(9)));
    }

    #[test]
    fn test_book_checked_before_user() {
        let f = fixture();

        let err = f
            .service
            .create_review(EntityId::new(998), EntityId::new(999), 4, "x")
            .unwrap_err();
        assert!(matches!(err, ShopError::BookNotFound(_)));

        let err = f
            .service
            .create_review(EntityId::new(998), f.book.id, 4, "x")
            .unwrap_err();
        assert!(matches!(err, ShopError::UserNotFound(_)));
        assert!(f.service.get_book_reviews(f.book.id).is_empty());
    }
}
