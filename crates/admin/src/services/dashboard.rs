//! Dashboard stats for the admin landing page.

use warung_core::{ChatThread, Order, OrderStatus, Price};
use warung_storage::{KvStore, keys};

/// The numbers on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    /// Orders ever placed.
    pub total_orders: usize,
    /// Sum of order totals, cancelled orders excluded.
    pub total_revenue: Price,
    /// Orders per pipeline stage, in [`OrderStatus::ALL`] order.
    pub orders_by_status: [(OrderStatus, usize); 4],
    /// Unread messages across all threads.
    pub pending_messages: u32,
    /// Registered accounts.
    pub total_customers: usize,
}

/// Service computing dashboard stats from the store.
pub struct DashboardService<'a> {
    store: &'a KvStore,
}

impl<'a> DashboardService<'a> {
    /// Create the service.
    #[must_use]
    pub const fn new(store: &'a KvStore) -> Self {
        Self { store }
    }

    /// Compute the stats. Every call reads the store fresh.
    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        let orders: Vec<Order> = self.store.get_or_default(keys::ORDERS);
        let threads: Vec<ChatThread> = self.store.get_or_default(keys::CHAT_THREADS);
        let accounts: Vec<warung_core::UserAccount> =
            self.store.get_or_default(keys::USER_ACCOUNTS);

        let total_revenue = orders
            .iter()
            .filter(|o| o.status != OrderStatus::Dibatalkan)
            .map(|o| o.total)
            .sum();

        let orders_by_status = OrderStatus::ALL.map(|status| {
            let count = orders.iter().filter(|o| o.status == status).count();
            (status, count)
        });

        DashboardStats {
            total_orders: orders.len(),
            total_revenue,
            orders_by_status,
            pending_messages: threads.iter().map(|t| t.unread).sum(),
            total_customers: accounts.len(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;
    use warung_core::{
        Cart, DeliveryDetails, DeliveryMethod, OrderId, PaymentMethod, seed_menu,
    };

    fn order(status: OrderStatus, total: u64) -> Order {
        let menu = seed_menu();
        let mut cart = Cart::default();
        cart.add(menu.first().unwrap(), 1);
        Order {
            id: OrderId::generate(),
            items: cart.lines().to_vec(),
            delivery: DeliveryDetails::default(),
            delivery_method: DeliveryMethod::Regular,
            payment_method: PaymentMethod::CashOnDelivery,
            notes: String::new(),
            subtotal: Price::from_rupiah(total),
            tax: Price::ZERO,
            shipping: Price::ZERO,
            total: Price::from_rupiah(total),
            created_at: Utc::now(),
            status,
        }
    }

    #[test]
    fn test_stats_on_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = KvStore::open(dir.path()).unwrap();

        let stats = DashboardService::new(&store).stats();
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.total_revenue, Price::ZERO);
        assert_eq!(stats.pending_messages, 0);
    }

    #[test]
    fn test_revenue_excludes_cancelled_orders() {
        let dir = TempDir::new().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        store
            .set(
                keys::ORDERS,
                &vec![
                    order(OrderStatus::Selesai, 50_000),
                    order(OrderStatus::Diproses, 20_000),
                    order(OrderStatus::Dibatalkan, 99_000),
                ],
            )
            .unwrap();

        let stats = DashboardService::new(&store).stats();
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.total_revenue, Price::from_rupiah(70_000));
        assert_eq!(
            stats.orders_by_status,
            [
                (OrderStatus::Diproses, 1),
                (OrderStatus::Dikirim, 0),
                (OrderStatus::Selesai, 1),
                (OrderStatus::Dibatalkan, 1),
            ]
        );
    }
}
