//! # Domain Types
//!
//! Entity types shared by the store and the service layer.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐                 │
//! │  │    User      │   │   Category   │◄──│     Book     │                 │
//! │  │  username    │   │  name        │   │  price       │                 │
//! │  │  role        │   └──────────────┘   │  stock       │                 │
//! │  └──────┬───────┘                      └──────┬───────┘                 │
//! │         │ owns 0..1                           │ referenced by           │
//! │         ▼                                     ▼                         │
//! │  ┌──────────────┐   checkout    ┌──────────────┐   ┌──────────────┐     │
//! │  │    Cart      │──────────────►│    Order     │◄──│   Payment    │     │
//! │  │  items[]     │               │  quantity    │   │  status      │     │
//! │  └──────────────┘               └──────────────┘   └──────────────┘     │
//! │                                                                         │
//! │  Review ──► (User, Book)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Shared Identity
//! Every entity, including cart line items, takes its id from a single
//! sequence owned by the store. Ids are unique across the whole store, not
//! only within one entity type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Entity Id
// =============================================================================

/// Identifier drawn from the store-wide sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    #[inline]
    pub const fn new(value: u64) -> Self {
        EntityId(value)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// User
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// A registered customer or administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    /// Unique across all users.
    pub username: String,
    /// Stored as given; compared verbatim on login.
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub address: String,
    pub phone: String,
    pub role: Role,
}

/// Registration input: a [`User`] without its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub role: Role,
}

impl NewUser {
    pub fn into_user(self, id: EntityId) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
            email: self.email,
            full_name: self.full_name,
            address: self.address,
            phone: self.phone,
            role: self.role,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

impl NewCategory {
    pub fn into_category(self, id: EntityId) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: EntityId,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    /// Unit price, never negative.
    pub price: Money,
    /// Units on hand. Changed only through the store's stock update.
    pub stock_quantity: i64,
    pub description: String,
    pub category_id: EntityId,
}

impl Book {
    /// Checks whether `quantity` units can be taken from current stock.
    #[inline]
    pub fn has_stock_for(&self, quantity: i64) -> bool {
        quantity <= self.stock_quantity
    }

    /// Price of `quantity` units at the current unit price, or `None` if
    /// it does not fit in `Money`.
    #[inline]
    pub fn line_total(&self, quantity: i64) -> Option<Money> {
        self.price.checked_times(quantity)
    }
}

/// Catalog input: a [`Book`] without its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    pub price: Money,
    pub stock_quantity: i64,
    pub description: String,
    pub category_id: EntityId,
}

impl NewBook {
    pub fn into_book(self, id: EntityId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            isbn: self.isbn,
            price: self.price,
            stock_quantity: self.stock_quantity,
            description: self.description,
            category_id: self.category_id,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// One purchased cart line. Created only by checkout, never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    pub book_id: EntityId,
    pub quantity: i64,
}

// =============================================================================
// Payment
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
    BankTransfer,
}

/// Lifecycle of a payment.
///
/// ```text
///            ┌──────────► Completed
///  Pending ──┤
///            └──────────► Failed
/// ```
/// A payment leaves `Pending` at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    /// Returns true once the payment has left `Pending`.
    #[inline]
    pub fn is_final(&self) -> bool {
        !matches!(self, PaymentStatus::Pending)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Completed => write!(f, "completed"),
            PaymentStatus::Failed => write!(f, "failed"),
        }
    }
}

/// A payment towards an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: EntityId,
    pub order_id: EntityId,
    pub method: PaymentMethod,
    pub amount: Money,
    pub status: PaymentStatus,
}

// =============================================================================
// Review
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: EntityId,
    pub user_id: EntityId,
    pub book_id: EntityId,
    /// 1 to 5, checked when the review is created.
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Checkout Summary
// =============================================================================

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    /// One order per cart line, in cart order.
    pub orders: Vec<Order>,
    /// Σ price × quantity, evaluated before stock was decremented.
    pub total_amount: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book(stock: i64) -> Book {
        NewBook {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            publisher: "Chilton".to_string(),
            isbn: "9780441013593".to_string(),
            price: Money::from_cents(1000),
            stock_quantity: stock,
            description: "Desert planet".to_string(),
            category_id: EntityId::new(1),
        }
        .into_book(EntityId::new(2))
    }

    #[test]
    fn test_book_stock_check() {
        let book = sample_book(10);
        assert!(book.has_stock_for(10));
        assert!(!book.has_stock_for(11));
        assert_eq!(book.line_total(3), Some(Money::from_cents(3000)));
        assert_eq!(book.line_total(i64::MAX), None);
    }

    #[test]
    fn test_payment_status_default_and_finality() {
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
        assert!(!PaymentStatus::Pending.is_final());
        assert!(PaymentStatus::Completed.is_final());
        assert!(PaymentStatus::Failed.is_final());
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditCard).unwrap(),
            "\"credit_card\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"bank_transfer\""
        );
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(PaymentStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_new_user_role_defaults_to_user() {
        let json = r#"{
            "username": "reader",
            "password": "secret",
            "email": "reader@example.com",
            "full_name": "Avid Reader",
            "address": "1 Library Lane",
            "phone": "555-0100"
        }"#;
        let new_user: NewUser = serde_json::from_str(json).unwrap();
        let user = new_user.into_user(EntityId::new(7));
        assert_eq!(user.role, Role::User);
        assert_eq!(user.id.get(), 7);
    }
}
