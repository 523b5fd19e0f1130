//! In-memory repositories for service and handler tests.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::catalog::{Customer, NewCustomer, NewProduct, Product};
use crate::domain::errors::DomainError;
use crate::domain::order::{
    assemble_orders, NewOrder, OrderHeader, OrderLineView, OrderQuery, OrderSort, OrderView,
};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};

#[derive(Default)]
struct State {
    customers: Vec<Customer>,
    products: Vec<Product>,
    orders: Vec<OrderHeader>,
    items: Vec<(i64, OrderLineView)>,
    next_customer_id: i32,
    next_product_id: i32,
    next_order_id: i64,
    fail_on_item: Option<usize>,
}

/// Shared store behind all three repository traits. Clones see the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next order creation fail while inserting the item at `index`.
    pub fn fail_on_item(&self, index: usize) {
        self.lock().fail_on_item = Some(index);
    }

    pub fn order_count(&self) -> usize {
        self.lock().orders.len()
    }

    pub fn item_count(&self) -> usize {
        self.lock().items.len()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("store mutex poisoned")
    }
}

impl OrderRepository for InMemoryStore {
    fn create(&self, order: NewOrder) -> Result<i64, DomainError> {
        let mut state = self.lock();

        if let Some(id) = order.customer_id {
            if !state.customers.iter().any(|c| c.id == id) {
                return Err(DomainError::InvalidInput(format!("cliente {id} does not exist")));
            }
        }

        // Stage everything, publish only once every item made it.
        let order_id = state.next_order_id + 1;
        let mut staged = Vec::with_capacity(order.lines.len());
        for (idx, line) in order.lines.into_iter().enumerate() {
            if state.fail_on_item == Some(idx) {
                state.fail_on_item = None;
                return Err(DomainError::Internal(format!("simulated failure on item {idx}")));
            }
            staged.push((
                order_id,
                OrderLineView {
                    product_name: line.product_name,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    category: line.category,
                },
            ));
        }

        state.next_order_id = order_id;
        state.orders.push(OrderHeader {
            id: order_id,
            customer_id: order.customer_id,
            created_at: order.placed_at,
            total: order.total,
        });
        state.items.extend(staged);
        Ok(order_id)
    }

    fn list(&self, query: OrderQuery) -> Result<Vec<OrderView>, DomainError> {
        let state = self.lock();
        let mut headers: Vec<OrderHeader> = state
            .orders
            .iter()
            .filter(|o| match query.created_between {
                Some((start, end)) => o.created_at >= start && o.created_at <= end,
                None => true,
            })
            .cloned()
            .collect();
        match query.sort {
            OrderSort::NewestFirst => {
                headers.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)))
            }
            OrderSort::Chronological => {
                headers.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)))
            }
        }
        Ok(assemble_orders(
            headers,
            state.items.clone(),
            state.customers.clone(),
        ))
    }
}

impl CustomerRepository for InMemoryStore {
    fn create(&self, customer: NewCustomer) -> Result<i32, DomainError> {
        let mut state = self.lock();
        state.next_customer_id += 1;
        let id = state.next_customer_id;
        state.customers.push(Customer {
            id,
            name: customer.name,
            phone: customer.phone,
            address: customer.address,
        });
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Customer>, DomainError> {
        Ok(self.lock().customers.clone())
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut state = self.lock();
        let before = state.customers.len();
        state.customers.retain(|c| c.id != id);
        if state.customers.len() == before {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    fn find_by_name_and_phone(
        &self,
        name: &str,
        phone: &str,
    ) -> Result<Option<Customer>, DomainError> {
        let name = name.to_lowercase();
        Ok(self
            .lock()
            .customers
            .iter()
            .find(|c| c.name.to_lowercase() == name && c.phone == phone)
            .cloned())
    }
}

impl ProductRepository for InMemoryStore {
    fn create(&self, product: NewProduct) -> Result<i32, DomainError> {
        let mut state = self.lock();
        state.next_product_id += 1;
        let id = state.next_product_id;
        state.products.push(Product {
            id,
            name: product.name,
            price: product.price,
            category: product.category,
        });
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.lock().products.clone())
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut state = self.lock();
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}
