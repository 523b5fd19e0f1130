use bigdecimal::BigDecimal;
use chrono::{Local, NaiveDateTime};

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, OrderLineInput, OrderQuery, OrderView};
use crate::domain::ports::OrderRepository;

/// Source of order creation timestamps (server local time).
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub struct OrderService<R> {
    repo: R,
    clock: Clock,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, local_now)
    }

    pub fn with_clock(repo: R, clock: Clock) -> Self {
        Self { repo, clock }
    }

    /// Validates the checkout and records it atomically, returning the new
    /// order id. The declared total is stored as given.
    pub fn submit_order(
        &self,
        customer_id: Option<i32>,
        lines: Vec<OrderLineInput>,
        total: BigDecimal,
    ) -> Result<i64, DomainError> {
        let order = NewOrder {
            customer_id,
            lines,
            total,
            placed_at: (self.clock)(),
        }
        .validated()?;

        let line_sum = order.line_sum();
        if line_sum != order.total {
            log::warn!(
                "declared total {} differs from item sum {} (cliente {:?}); storing declared value",
                order.total,
                line_sum,
                order.customer_id
            );
        }

        let item_count = order.lines.len();
        let order_id = self.repo.create(order)?;
        log::info!("order {} recorded with {} item(s)", order_id, item_count);
        Ok(order_id)
    }

    /// Every order, newest first, with items and customer.
    pub fn list_orders(&self) -> Result<Vec<OrderView>, DomainError> {
        self.repo.list(OrderQuery::all_newest_first())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::catalog::NewCustomer;
    use crate::domain::order::{OrderCustomer, GUEST_NAME};
    use crate::domain::ports::CustomerRepository;
    use crate::test_support::InMemoryStore;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    fn line(name: &str, qty: i32, price: &str, category: &str) -> OrderLineInput {
        OrderLineInput {
            product_name: name.to_string(),
            quantity: qty,
            unit_price: dec(price),
            category: Some(category.to_string()),
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 4)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn register(store: &InMemoryStore, name: &str) -> i32 {
        CustomerRepository::create(
            store,
            NewCustomer {
                name: name.to_string(),
                phone: "11999990000".to_string(),
                address: "Rua das Flores, 1".to_string(),
            },
        )
        .expect("customer created")
    }

    #[test]
    fn submit_returns_increasing_ids() {
        let store = InMemoryStore::new();
        let service = OrderService::with_clock(store.clone(), noon);

        let first = service
            .submit_order(None, vec![line("Calabresa", 1, "40", "pizza")], dec("40"))
            .unwrap();
        let second = service
            .submit_order(None, vec![line("Coca", 2, "8", "bebida")], dec("16"))
            .unwrap();

        assert!(second > first);
        assert_eq!(store.order_count(), 2);
        assert_eq!(store.item_count(), 2);
    }

    #[test]
    fn empty_cart_persists_nothing() {
        let store = InMemoryStore::new();
        let service = OrderService::new(store.clone());

        let err = service.submit_order(None, vec![], dec("0")).unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(store.order_count(), 0);
    }

    #[test]
    fn invalid_item_persists_nothing() {
        let store = InMemoryStore::new();
        let service = OrderService::new(store.clone());

        let err = service
            .submit_order(
                None,
                vec![
                    line("Calabresa", 1, "40", "pizza"),
                    line("Coca", -1, "8", "bebida"),
                ],
                dec("32"),
            )
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(store.order_count(), 0);
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn failure_mid_insert_leaves_no_trace() {
        let store = InMemoryStore::new();
        let service = OrderService::new(store.clone());
        store.fail_on_item(1);

        let err = service
            .submit_order(
                None,
                vec![
                    line("Calabresa", 1, "40", "pizza"),
                    line("Coca", 1, "8", "bebida"),
                ],
                dec("48"),
            )
            .unwrap_err();

        assert!(matches!(err, DomainError::Internal(_)));
        assert_eq!(store.order_count(), 0);
        assert_eq!(store.item_count(), 0);
        assert!(service.list_orders().unwrap().is_empty());
    }

    #[test]
    fn unknown_customer_is_rejected() {
        let store = InMemoryStore::new();
        let service = OrderService::new(store.clone());

        let err = service
            .submit_order(Some(42), vec![line("Calabresa", 1, "40", "pizza")], dec("40"))
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(store.order_count(), 0);
    }

    #[test]
    fn mismatched_total_is_stored_as_declared() {
        let store = InMemoryStore::new();
        let service = OrderService::with_clock(store, noon);

        service
            .submit_order(None, vec![line("Calabresa", 2, "40", "pizza")], dec("1.50"))
            .unwrap();

        let orders = service.list_orders().unwrap();
        assert_eq!(orders[0].total, dec("1.50"));
    }

    #[test]
    fn listing_attaches_customer_or_guest() {
        let store = InMemoryStore::new();
        let ana = register(&store, "Ana");
        let service = OrderService::new(store);

        service
            .submit_order(Some(ana), vec![line("Calabresa", 1, "40", "pizza")], dec("40"))
            .unwrap();
        service
            .submit_order(None, vec![line("Coca", 1, "8", "bebida")], dec("8"))
            .unwrap();

        let orders = service.list_orders().unwrap();
        let names: Vec<&str> = orders
            .iter()
            .map(|o| match &o.customer {
                OrderCustomer::Registered(c) => c.name.as_str(),
                OrderCustomer::Guest { .. } => GUEST_NAME,
            })
            .collect();
        assert!(names.contains(&"Ana"));
        assert!(names.contains(&GUEST_NAME));
    }

    #[test]
    fn listing_twice_without_writes_is_identical() {
        let store = InMemoryStore::new();
        let service = OrderService::new(store);
        service
            .submit_order(None, vec![line("Calabresa", 1, "40", "pizza")], dec("40"))
            .unwrap();

        assert_eq!(service.list_orders().unwrap(), service.list_orders().unwrap());
    }
}
