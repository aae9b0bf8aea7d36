//! # Order Repository
//!
//! Orders and the payments made against them.
//!
//! ## Payment Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Payment Lifecycle                                 │
//! │                                                                         │
//! │  1. CREATE                                                             │
//! │     └── create_payment() → Payment { status: Pending }                 │
//! │                                                                         │
//! │  2. SETTLE (later, from the settlement task)                           │
//! │     └── update_payment_status(id, Completed | Failed)                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::store::Store;
use bookstore_core::{EntityId, Money, Order, Payment, PaymentMethod, PaymentStatus};

impl Store {
    pub fn create_order(&mut self, book_id: EntityId, quantity: i64) -> Order {
        let order = Order {
            id: self.ids.next_id(),
            book_id,
            quantity,
        };
        debug!(id = %order.id, book_id = %book_id, quantity, "Inserting order");

        self.orders.push(order.clone());
        order
    }

    pub fn get_order_by_id(&self, id: EntityId) -> Option<Order> {
        self.orders.iter().find(|o| o.id == id).cloned()
    }

    /// All orders in creation order.
    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.clone()
    }

    /// Records a payment in `Pending` status.
    pub fn create_payment(
        &mut self,
        order_id: EntityId,
        method: PaymentMethod,
        amount: Money,
    ) -> Payment {
        let payment = Payment {
            id: self.ids.next_id(),
            order_id,
            method,
            amount,
            status: PaymentStatus::Pending,
        };
        debug!(id = %payment.id, order_id = %order_id, amount = %amount, "Recording payment");

        self.payments.push(payment.clone());
        payment
    }

    pub fn get_payment_by_id(&self, id: EntityId) -> Option<Payment> {
        self.payments.iter().find(|p| p.id == id).cloned()
    }

    /// Sets a payment's status.
    ///
    /// ## Returns
    /// `true` if the payment existed.
    pub fn update_payment_status(&mut self, payment_id: EntityId, status: PaymentStatus) -> bool {
        match self.payments.iter_mut().find(|p| p.id == payment_id) {
            Some(payment) => {
                debug!(id = %payment_id, from = %payment.status, to = %status, "Updating payment status");
                payment.status = status;
                true
            }
            None => false,
        }
    }
}
