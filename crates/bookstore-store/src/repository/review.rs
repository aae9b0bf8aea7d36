//! # Review Repository

use chrono::Utc;
use tracing::debug;

use crate::store::Store;
use bookstore_core::{EntityId, Review};

impl Store {
    /// Creates a review stamped with the current time.
    ///
    /// The rating is expected to be validated already.
    pub fn create_review(
        &mut self,
        user_id: EntityId,
        book_id: EntityId,
        rating: u8,
        comment: impl Into<String>,
    ) -> Review {
        let review = Review {
            id: self.ids.next_id(),
            user_id,
            book_id,
            rating,
            comment: comment.into(),
            created_at: Utc::now(),
        };
        debug!(id = %review.id, book_id = %book_id, rating, "Inserting review");

        self.reviews.push(review.clone());
        review
    }

    /// All reviews of a book, in creation order.
    pub fn get_reviews_by_book_id(&self, book_id: EntityId) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.book_id == book_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reviews_filtered_by_book_in_order() {
        let mut store = Store::new();
        let user = EntityId::new(1);
        let dune = EntityId::new(2);
        let emma = EntityId::new(3);

        let first = store.create_review(user, dune, 5, "Great");
        store.create_review(user, emma, 3, "Fine");
        let second = store.create_review(user, dune, 4, "Good");

        let reviews = store.get_reviews_by_book_id(dune);
        assert_eq!(reviews, vec![first, second]);
        assert!(store.get_reviews_by_book_id(EntityId::new(77)).is_empty());
    }
}
