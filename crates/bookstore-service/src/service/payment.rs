//! # Payments
//!
//! Payments are created pending and settle later, on a Tokio task.
//!
//! ## Settlement Lifecycle
//! ```text
//! process_payment()
//!      │
//!      ├──► store: Payment { status: pending }
//!      │
//!      └──► tokio::spawn ──► sleep(settle_delay) ──► gateway.settle()
//!                │                                        │
//!                │ cancel()                               ▼
//!                ▼                             store: completed | failed
//!        payment stays pending
//! ```
//!
//! The caller gets a [`PaymentSettlement`] back immediately and can await,
//! poll, or cancel it. `get_payment` always reflects the stored status.

use std::sync::Arc;

use rand::Rng;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::BookShoppingService;
use bookstore_core::{EntityId, Money, Payment, PaymentMethod, PaymentStatus, ShopError, ShopResult};

// =============================================================================
// Gateways
// =============================================================================

/// Decides how a pending payment settles.
pub trait PaymentGateway: Send + Sync {
    /// Returns the final status, `Completed` or `Failed`.
    fn settle(&self, payment: &Payment) -> PaymentStatus;
}

/// Completes a payment with a fixed probability.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    success_rate: f64,
}

impl SimulatedGateway {
    /// `success_rate` is clamped to `0.0..=1.0`; NaN counts as 0.
    pub fn new(success_rate: f64) -> Self {
        let success_rate = if success_rate.is_nan() {
            0.0
        } else {
            success_rate.clamp(0.0, 1.0)
        };
        SimulatedGateway { success_rate }
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }
}

impl PaymentGateway for SimulatedGateway {
    fn settle(&self, _payment: &Payment) -> PaymentStatus {
        if rand::thread_rng().gen_bool(self.success_rate) {
            PaymentStatus::Completed
        } else {
            PaymentStatus::Failed
        }
    }
}

/// Always settles to the same status.
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcome(pub PaymentStatus);

impl PaymentGateway for FixedOutcome {
    fn settle(&self, _payment: &Payment) -> PaymentStatus {
        self.0
    }
}

// =============================================================================
// Settlement Handle
// =============================================================================

/// A scheduled payment transition.
///
/// Dropping the handle does not cancel the settlement.
#[derive(Debug)]
pub struct PaymentSettlement {
    payment: Payment,
    task: JoinHandle<PaymentStatus>,
}

impl PaymentSettlement {
    /// The payment as it was stored, still pending.
    pub fn payment(&self) -> &Payment {
        &self.payment
    }

    pub fn payment_id(&self) -> EntityId {
        self.payment.id
    }

    /// True once the settlement task has finished running.
    ///
    /// After [`cancel`](Self::cancel) this stays false until the runtime has
    /// processed the abort; use [`wait`](Self::wait) to observe cancellation.
    pub fn is_settled(&self) -> bool {
        self.task.is_finished()
    }

    /// Aborts the pending transition. No effect if it already ran.
    pub fn cancel(&self) {
        debug!(payment_id = %self.payment.id, "Cancelling settlement");
        self.task.abort();
    }

    /// Waits for the final status.
    ///
    /// ## Errors
    /// - `SettlementCancelled` if [`cancel`](Self::cancel) won the race
    pub async fn wait(self) -> ShopResult<PaymentStatus> {
        match self.task.await {
            Ok(status) => Ok(status),
            Err(e) if e.is_cancelled() => Err(ShopError::SettlementCancelled(self.payment.id)),
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    }
}

// =============================================================================
// Service Operations
// =============================================================================

impl BookShoppingService {
    /// Records a pending payment for an order and schedules its settlement.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// ## Errors (checked in this order)
    /// - `OrderNotFound` if the order does not exist
    /// - `SchedulerUnavailable` outside a Tokio runtime (nothing is stored)
    pub fn process_payment(
        &self,
        order_id: EntityId,
        method: PaymentMethod,
        amount: Money,
    ) -> ShopResult<PaymentSettlement> {
        let (runtime, payment) = self.store.write(|store| {
            store
                .get_order_by_id(order_id)
                .ok_or(ShopError::OrderNotFound(order_id))?;
            let runtime = Handle::try_current()
                .map_err(|e| ShopError::SchedulerUnavailable(e.to_string()))?;
            Ok::<_, ShopError>((runtime, store.create_payment(order_id, method, amount)))
        })?;

        let delay = self.config.payment.settle_delay();
        debug!(payment_id = %payment.id, %order_id, ?delay, "Payment pending");

        let store = self.store.clone();
        let gateway = Arc::clone(&self.gateway);
        let pending = payment.clone();
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;

            let status = gateway.settle(&pending);
            let applied = store.write(|s| match s.get_payment_by_id(pending.id) {
                Some(current) if current.status.is_final() => {
                    debug!(payment_id = %pending.id, current = %current.status, "Payment already final");
                    current.status
                }
                _ => {
                    s.update_payment_status(pending.id, status);
                    status
                }
            });
            info!(payment_id = %pending.id, status = %applied, "Payment settled");
            applied
        });

        Ok(PaymentSettlement { payment, task })
    }

    pub fn get_payment(&self, payment_id: EntityId) -> Option<Payment> {
        self.store.read(|store| store.get_payment_by_id(payment_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fixtures::fixture;
    use bookstore_core::{ErrorKind, Order};
    use std::time::Duration;

    fn ordered(f: &crate::service::fixtures::Fixture) -> Order {
        f.service.add_to_cart(f.user.id, f.book.id, 2).unwrap();
        f.service.checkout(f.user.id).unwrap().orders.remove(0)
    }

    #[tokio::test(start_paused = true)]
    async fn test_payment_starts_pending_and_settles() {
        let f = fixture();
        let order = ordered(&f);

        let settlement = f
            .service
            .process_payment(order.id, PaymentMethod::CreditCard, Money::from_cents(2000))
            .unwrap();
        let payment_id = settlement.payment_id();

        assert_eq!(settlement.payment().status, PaymentStatus::Pending);
        assert_eq!(settlement.payment().order_id, order.id);
        assert_eq!(
            f.service.get_payment(payment_id).unwrap().status,
            PaymentStatus::Pending
        );
        assert!(!settlement.is_settled());

        let status = settlement.wait().await.unwrap();
        assert_eq!(status, PaymentStatus::Completed);
        assert_eq!(f.service.get_payment(payment_id).unwrap().status, status);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settlement_waits_for_delay() {
        let f = fixture();
        let service = f.service.clone().with_gateway(FixedOutcome(PaymentStatus::Failed));
        let order = ordered(&f);

        let settlement = service
            .process_payment(order.id, PaymentMethod::Paypal, Money::from_cents(2000))
            .unwrap();
        let payment_id = settlement.payment_id();

        tokio::time::sleep(Duration::from_millis(900)).await;
        assert_eq!(
            service.get_payment(payment_id).unwrap().status,
            PaymentStatus::Pending
        );

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(settlement.is_settled());
        assert_eq!(
            service.get_payment(payment_id).unwrap().status,
            PaymentStatus::Failed
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_settlement_stays_pending() {
        let f = fixture();
        let order = ordered(&f);

        let settlement = f
            .service
            .process_payment(order.id, PaymentMethod::BankTransfer, Money::from_cents(2000))
            .unwrap();
        let payment_id = settlement.payment_id();

        settlement.cancel();
        for _ in 0..10 {
            if settlement.is_settled() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(settlement.is_settled());

        let err = settlement.wait().await.unwrap_err();
        assert!(matches!(err, ShopError::SettlementCancelled(id) if id == payment_id));
        assert_eq!(err.kind(), ErrorKind::Internal);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(
            f.service.get_payment(payment_id).unwrap().status,
            PaymentStatus::Pending
        );
    }

    #[tokio::test]
    async fn test_payment_for_unknown_order() {
        let f = fixture();
        let err = f
            .service
            .process_payment(EntityId::new(999), PaymentMethod::CreditCard, Money::zero())
            .unwrap_err();
        assert!(matches!(err, ShopError::OrderNotFound(_)));
        assert!(f.service.get_payment(EntityId::new(999)).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_final_status_is_not_overwritten() {
        let f = fixture();
        let service = f.service.clone().with_gateway(FixedOutcome(PaymentStatus::Failed));
        let order = ordered(&f);

        let settlement = service
            .process_payment(order.id, PaymentMethod::CreditCard, Money::from_cents(2000))
            .unwrap();
        let payment_id = settlement.payment_id();
        service
            .store()
            .write(|s| s.update_payment_status(payment_id, PaymentStatus::Completed));

        assert_eq!(settlement.wait().await.unwrap(), PaymentStatus::Completed);
        assert_eq!(
            service.get_payment(payment_id).unwrap().status,
            PaymentStatus::Completed
        );
    }

    #[test]
    fn test_unknown_order_reported_before_runtime_check() {
        let f = fixture();
        let err = f
            .service
            .process_payment(EntityId::new(999), PaymentMethod::CreditCard, Money::zero())
            .unwrap_err();
        assert!(matches!(err, ShopError::OrderNotFound(_)));
    }

    #[test]
    fn test_payment_outside_runtime() {
        let f = fixture();
        let order = ordered(&f);
        let before = f.service.store().write(|s| s.next_id());

        let err = f
            .service
            .process_payment(order.id, PaymentMethod::CreditCard, Money::from_cents(2000))
            .unwrap_err();
        assert!(matches!(err, ShopError::SchedulerUnavailable(_)));
        // no payment was stored, so no id was drawn in between
        let after = f.service.store().write(|s| s.next_id());
        assert_eq!(after.get(), before.get() + 1);
        assert!(f.service.get_payment(before).is_none());
    }

    #[test]
    fn test_simulated_gateway_extremes() {
        let payment = Payment {
            id: EntityId::new(1),
            order_id: EntityId::new(2),
            method: PaymentMethod::CreditCard,
            amount: Money::from_cents(100),
            status: PaymentStatus::Pending,
        };

        assert_eq!(SimulatedGateway::new(1.0).settle(&payment), PaymentStatus::Completed);
        assert_eq!(SimulatedGateway::new(0.0).settle(&payment), PaymentStatus::Failed);
        assert_eq!(SimulatedGateway::new(7.0).success_rate(), 1.0);
        assert_eq!(SimulatedGateway::new(f64::NAN).success_rate(), 0.0);
    }
}
