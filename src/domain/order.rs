use std::collections::HashMap;

use bigdecimal::{BigDecimal, Zero};
use chrono::NaiveDateTime;

use super::catalog::{at_most, required, Customer, CATEGORY_MAX_CHARS, NAME_MAX_CHARS};
use super::errors::DomainError;
use super::money::{
    check_precision, to_cents, to_non_negative_cents, PRICE_PRECISION, TOTAL_PRECISION,
};

/// Name shown for orders that have no (or no longer a) customer record.
pub const GUEST_NAME: &str = "Guest";

#[derive(Debug, Clone)]
pub struct OrderLineInput {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub category: Option<String>,
}

/// A checkout as submitted by the client, before it is persisted.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: Option<i32>,
    pub lines: Vec<OrderLineInput>,
    /// Client-declared total, stored as given.
    pub total: BigDecimal,
    pub placed_at: NaiveDateTime,
}

impl NewOrder {
    /// Validates every field and normalises amounts to cents. Nothing is
    /// recomputed: the declared total passes through untouched apart from
    /// the scale check.
    pub fn validated(self) -> Result<Self, DomainError> {
        if let Some(id) = self.customer_id {
            if id <= 0 {
                return Err(DomainError::InvalidInput(format!(
                    "clienteId must be a positive integer, got {id}"
                )));
            }
        }
        if self.lines.is_empty() {
            return Err(DomainError::InvalidInput(
                "an order needs at least one item".to_string(),
            ));
        }

        let lines = self
            .lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| line.validated(idx))
            .collect::<Result<Vec<_>, _>>()?;

        let total = to_cents("total", &self.total)?;
        check_precision("total", &total, TOTAL_PRECISION)?;

        Ok(Self {
            customer_id: self.customer_id,
            lines,
            total,
            placed_at: self.placed_at,
        })
    }

    /// Σ(quantity × unit price) over the line items.
    pub fn line_sum(&self) -> BigDecimal {
        self.lines
            .iter()
            .fold(BigDecimal::zero(), |acc, l| acc + &l.unit_price * BigDecimal::from(l.quantity))
    }
}

impl OrderLineInput {
    fn validated(self, idx: usize) -> Result<Self, DomainError> {
        let name_field = format!("itens[{idx}].produto");
        let product_name = at_most(
            &name_field,
            required(&name_field, &self.product_name)?,
            NAME_MAX_CHARS,
        )?;
        if self.quantity <= 0 {
            return Err(DomainError::InvalidInput(format!(
                "itens[{idx}].quantidade must be positive, got {}",
                self.quantity
            )));
        }
        let price_field = format!("itens[{idx}].preco");
        let unit_price = to_non_negative_cents(&price_field, &self.unit_price)?;
        check_precision(&price_field, &unit_price, PRICE_PRECISION)?;
        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .map(|c| at_most(&format!("itens[{idx}].tipo"), c, CATEGORY_MAX_CHARS))
            .transpose()?;

        Ok(Self {
            product_name,
            quantity: self.quantity,
            unit_price,
            category,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineView {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub category: Option<String>,
}

/// The customer an order is shown with.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderCustomer {
    Registered(Customer),
    /// No customer on record. Carries the stored id when the reference
    /// points at a customer that no longer exists.
    Guest { id: Option<i32> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub id: i64,
    pub created_at: NaiveDateTime,
    pub total: BigDecimal,
    pub lines: Vec<OrderLineView>,
    pub customer: OrderCustomer,
}

/// Parent row of an order as read back from storage.
#[derive(Debug, Clone)]
pub struct OrderHeader {
    pub id: i64,
    pub customer_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub total: BigDecimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSort {
    NewestFirst,
    Chronological,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderQuery {
    /// Inclusive `[start, end]` bounds on the creation timestamp.
    pub created_between: Option<(NaiveDateTime, NaiveDateTime)>,
    pub sort: OrderSort,
}

impl OrderQuery {
    pub fn all_newest_first() -> Self {
        Self {
            created_between: None,
            sort: OrderSort::NewestFirst,
        }
    }

    pub fn between_chronological(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            created_between: Some((start, end)),
            sort: OrderSort::Chronological,
        }
    }
}

/// Joins the three batched reads (headers, line items keyed by order id,
/// customers) into full views. Header order is preserved; line items keep
/// their relative order within each order.
pub fn assemble_orders(
    headers: Vec<OrderHeader>,
    lines: Vec<(i64, OrderLineView)>,
    customers: Vec<Customer>,
) -> Vec<OrderView> {
    let mut lines_by_order: HashMap<i64, Vec<OrderLineView>> = HashMap::new();
    for (order_id, line) in lines {
        lines_by_order.entry(order_id).or_default().push(line);
    }
    let customers_by_id: HashMap<i32, Customer> =
        customers.into_iter().map(|c| (c.id, c)).collect();

    headers
        .into_iter()
        .map(|h| {
            let customer = h
                .customer_id
                .and_then(|id| customers_by_id.get(&id).cloned())
                .map(OrderCustomer::Registered)
                .unwrap_or(OrderCustomer::Guest { id: h.customer_id });
            OrderView {
                id: h.id,
                created_at: h.created_at,
                total: h.total,
                lines: lines_by_order.remove(&h.id).unwrap_or_default(),
                customer,
            }
        })
        .collect()
}
