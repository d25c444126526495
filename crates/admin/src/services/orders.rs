//! The order status registry.
//!
//! Orders are immutable snapshots except for their status, and the status
//! only moves along the [`OrderStatus`] pipeline. [`OrderRegistry::update_status`]
//! enforces the transition table; [`OrderRegistry::force_status`] is the
//! escape hatch for manual correction and deliberately skips the check, at
//! the cost of a warning in the log.

use tracing::{info, warn};

use warung_core::{Order, OrderId, OrderStatus};
use warung_storage::{KvStore, StoreError, keys};

/// Errors raised by registry mutations.
#[derive(Debug, thiserror::Error)]
pub enum OrderAdminError {
    /// No order with this ID.
    #[error("unknown order: {0}")]
    UnknownOrder(OrderId),

    /// The requested status move is not in the pipeline.
    #[error("illegal status transition: {from} -> {to}")]
    IllegalTransition {
        /// Current status.
        from: OrderStatus,
        /// Requested status.
        to: OrderStatus,
    },

    /// Store write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

/// The admin view of all orders.
pub struct OrderRegistry<'a> {
    store: &'a KvStore,
}

impl<'a> OrderRegistry<'a> {
    /// Create the registry handle.
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// All orders, oldest first.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.store.get_or_default(keys::ORDERS)
    }

    /// Orders currently in `status`.
    #[must_use]
    pub fn orders_with_status(&self, status: OrderStatus) -> Vec<Order> {
        self.orders()
            .into_iter()
            .filter(|o| o.status == status)
            .collect()
    }

    /// One order by ID.
    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<Order> {
        self.orders().into_iter().find(|o| o.id == *id)
    }

    /// Move an order to `next`, enforcing the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`OrderAdminError::UnknownOrder`] for a missing ID and
    /// [`OrderAdminError::IllegalTransition`] for a move outside the
    /// transition table. Setting the current status again is also an
    /// illegal transition.
    pub fn update_status(
        &self,
        id: &OrderId,
        next: OrderStatus,
    ) -> Result<Order, OrderAdminError> {
        self.set_status(id, next, false)
    }

    /// Move an order to `next` without consulting the pipeline.
    ///
    /// Manual override for correcting mistakes (a cancelled order that was
    /// actually delivered, a premature `Selesai`). Logged loudly.
    ///
    /// # Errors
    ///
    /// Returns [`OrderAdminError::UnknownOrder`] for a missing ID.
    pub fn force_status(
        &self,
        id: &OrderId,
        next: OrderStatus,
    ) -> Result<Order, OrderAdminError> {
        self.set_status(id, next, true)
    }

    fn set_status(
        &self,
        id: &OrderId,
        next: OrderStatus,
        force: bool,
    ) -> Result<Order, OrderAdminError> {
        let mut orders = self.orders();
        let order = orders
            .iter_mut()
            .find(|o| o.id == *id)
            .ok_or_else(|| OrderAdminError::UnknownOrder(id.clone()))?;

        let from = order.status;
        if !from.can_transition_to(next) {
            if !force {
                return Err(OrderAdminError::IllegalTransition { from, to: next });
            }
            warn!(order = %id, %from, to = %next, "status forced outside the pipeline");
        }

        order.status = next;
        let updated = order.clone();
        self.store.set(keys::ORDERS, &orders)?;

        info!(order = %id, %from, to = %next, "order status updated");
        Ok(updated)
    }
}
