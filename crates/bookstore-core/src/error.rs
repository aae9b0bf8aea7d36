//! # Error Types
//!
//! Domain-specific error types for the bookstore.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookstore-core errors (this file)                                     │
//! │  ├── ShopError        - Every failure a service operation can raise    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bookstore-service errors                                              │
//! │  └── ConfigError      - Configuration loading failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → ShopError → caller                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant carries a fixed human-readable message. Callers that need
//! to branch on the category use [`ShopError::kind`].

use thiserror::Error;

use crate::types::EntityId;

// =============================================================================
// Shop Error
// =============================================================================

/// Broad category of a [`ShopError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request collides with existing state (duplicate username).
    Conflict,
    /// A referenced entity does not exist.
    NotFound,
    /// The request breaks a business rule (stock, rating, empty cart).
    Validation,
    /// The operation could not be carried out by the runtime.
    Internal,
}

/// Errors raised by bookstore operations.
///
/// Failures abort the current operation. Checkout validates every line
/// before mutating anything, so no variant leaves partial state behind.
#[derive(Debug, Error)]
pub enum ShopError {
    /// Username is already registered.
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    #[error("User not found: {0}")]
    UserNotFound(EntityId),

    #[error("Book not found: {0}")]
    BookNotFound(EntityId),

    #[error("Category not found: {0}")]
    CategoryNotFound(EntityId),

    #[error("Order not found: {0}")]
    OrderNotFound(EntityId),

    #[error("Payment not found: {0}")]
    PaymentNotFound(EntityId),

    /// Requested quantity is larger than the current stock.
    ///
    /// ## When This Occurs
    /// - A single `add_to_cart` asks for more than is in stock
    /// - A cart line is larger than the stock left at checkout
    ///
    /// ## User Workflow
    /// ```text
    /// Cart: 5 × "Dune"
    ///      │
    ///      ▼
    /// checkout() reads stock: available=4
    ///      │
    ///      ▼
    /// InsufficientStock { title: "Dune", available: 4, requested: 5 }
    ///      │
    ///      ▼
    /// No orders created, no stock touched
    /// ```
    #[error("Insufficient stock for {title}: available {available}, requested {requested}")]
    InsufficientStock {
        title: String,
        available: i64,
        requested: i64,
    },

    /// Adding to an existing cart line would exceed the current stock.
    #[error("Total quantity for {title} exceeds stock: available {available}, requested {requested}")]
    QuantityExceedsStock {
        title: String,
        available: i64,
        requested: i64,
    },

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(i64),

    #[error("Cart is empty")]
    EmptyCart,

    /// The settlement task for a payment was aborted before it finished.
    #[error("Settlement for payment {0} was cancelled")]
    SettlementCancelled(EntityId),

    /// No async runtime is available to schedule a settlement.
    #[error("Payment scheduler unavailable: {0}")]
    SchedulerUnavailable(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ShopError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShopError::DuplicateUsername(_) => ErrorKind::Conflict,
            ShopError::UserNotFound(_)
            | ShopError::BookNotFound(_)
            | ShopError::CategoryNotFound(_)
            | ShopError::OrderNotFound(_)
            | ShopError::PaymentNotFound(_) => ErrorKind::NotFound,
            ShopError::InsufficientStock { .. }
            | ShopError::QuantityExceedsStock { .. }
            | ShopError::InvalidRating(_)
            | ShopError::EmptyCart
            | ShopError::Validation(_) => ErrorKind::Validation,
            ShopError::SettlementCancelled(_) | ShopError::SchedulerUnavailable(_) => {
                ErrorKind::Internal
            }
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any store access so a rejected request never touches state.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

/// Convenience type alias for Results with ShopError.
pub type ShopResult<T> = Result<T, ShopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ShopError::InsufficientStock {
            title: "Dune".to_string(),
            available: 4,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Dune: available 4, requested 5"
        );

        let err = ShopError::DuplicateUsername("testUser".to_string());
        assert_eq!(err.to_string(), "Username already exists: testUser");

        assert_eq!(ShopError::EmptyCart.to_string(), "Cart is empty");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            ShopError::DuplicateUsername("a".into()).kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            ShopError::BookNotFound(EntityId::new(9)).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(ShopError::InvalidRating(6).kind(), ErrorKind::Validation);
        assert_eq!(ShopError::EmptyCart.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_validation_converts_to_shop_error() {
        let validation_err = ValidationError::Required {
            field: "username".to_string(),
        };
        let shop_err: ShopError = validation_err.into();
        assert!(matches!(shop_err, ShopError::Validation(_)));
        assert_eq!(shop_err.kind(), ErrorKind::Validation);
    }
}
