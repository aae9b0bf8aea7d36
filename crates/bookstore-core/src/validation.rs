//! # Validation Module
//!
//! Input checks that run before the service touches the store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Types                                                        │
//! │  └── EntityId, Money, PaymentMethod make bad shapes unrepresentable    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Field rules (non-empty username, positive quantity, rating 1-5)   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Service                                                      │
//! │  └── Rules that need the store (existence, uniqueness, stock)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ShopError, ValidationError};
use crate::{MAX_RATING, MIN_RATING};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted username.
pub const MAX_USERNAME_LEN: usize = 50;

/// Validates a username.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 50 characters
///
/// ## Example
/// ```rust
/// use bookstore_core::validation::validate_username;
///
/// assert!(validate_username("testUser").is_ok());
/// assert!(validate_username("  ").is_err());
/// ```
pub fn validate_username(username: &str) -> ValidationResult<()> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: MAX_USERNAME_LEN,
        });
    }

    Ok(())
}

/// Validates a quantity requested for a cart line.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0); free books are allowed
///
/// ## Example
/// ```rust
/// use bookstore_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(2999).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an initial stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0); out-of-stock books can be listed
pub fn validate_stock_quantity(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock_quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a review rating and narrows it to `u8`.
///
/// Out-of-range ratings are reported as [`ShopError::InvalidRating`] rather
/// than a generic validation error so callers can tell them apart.
///
/// ## Example
/// ```rust
/// use bookstore_core::validation::validate_rating;
///
/// assert_eq!(validate_rating(5).unwrap(), 5);
/// assert!(validate_rating(0).is_err());
/// assert!(validate_rating(6).is_err());
/// ```
pub fn validate_rating(rating: i64) -> Result<u8, ShopError> {
    if rating < i64::from(MIN_RATING) || rating > i64::from(MAX_RATING) {
        return Err(ShopError::InvalidRating(rating));
    }

    u8::try_from(rating).map_err(|_| ShopError::InvalidRating(rating))
}
