use std::collections::BTreeSet;
use std::time::Duration;

use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{assemble_orders, NewOrder, OrderQuery, OrderSort, OrderView};
use crate::domain::ports::OrderRepository;
use crate::schema::{customers, order_items, orders};

use super::models::{CustomerRow, NewOrderItemRow, NewOrderRow, OrderItemRow, OrderRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
    submit_timeout: Duration,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool, submit_timeout: Duration) -> Self {
        Self {
            pool,
            submit_timeout,
        }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(&self, order: NewOrder) -> Result<i64, DomainError> {
        let mut conn = self.pool.get()?;
        let timeout_ms = self.submit_timeout.as_millis().max(1);

        conn.transaction::<_, DomainError, _>(|conn| {
            // The bound applies per statement; one overrun rolls back the whole order.
            diesel::sql_query(format!("SET LOCAL statement_timeout = {timeout_ms}"))
                .execute(conn)?;

            if let Some(customer_id) = order.customer_id {
                let known: bool = diesel::select(diesel::dsl::exists(
                    customers::table.filter(customers::id.eq(customer_id)),
                ))
                .get_result(conn)?;
                if !known {
                    return Err(DomainError::InvalidInput(format!(
                        "cliente {customer_id} does not exist"
                    )));
                }
            }

            // 1. Insert the order
            let order_id: i64 = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    customer_id: order.customer_id,
                    created_at: order.placed_at,
                    total: order.total.clone(),
                })
                .returning(orders::id)
                .get_result(conn)?;

            // 2. Insert its items
            let new_items: Vec<NewOrderItemRow> = order
                .lines
                .iter()
                .map(|l| NewOrderItemRow {
                    order_id,
                    product_name: l.product_name.clone(),
                    quantity: l.quantity,
                    unit_price: l.unit_price.clone(),
                    category: l.category.clone(),
                })
                .collect();
            diesel::insert_into(order_items::table)
                .values(&new_items)
                .execute(conn)?;

            Ok(order_id)
        })
    }

    fn list(&self, query: OrderQuery) -> Result<Vec<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        // Three batched reads from one snapshot, joined in memory.
        conn.build_transaction()
            .read_only()
            .repeatable_read()
            .run::<_, DomainError, _>(|conn| {
                let mut headers_query = orders::table.select(OrderRow::as_select()).into_boxed();
                if let Some((start, end)) = query.created_between {
                    headers_query = headers_query.filter(orders::created_at.between(start, end));
                }
                headers_query = match query.sort {
                    OrderSort::NewestFirst => {
                        headers_query.order((orders::created_at.desc(), orders::id.desc()))
                    }
                    OrderSort::Chronological => {
                        headers_query.order((orders::created_at.asc(), orders::id.asc()))
                    }
                };
                let headers: Vec<OrderRow> = headers_query.load(conn)?;
                if headers.is_empty() {
                    return Ok(Vec::new());
                }

                let order_ids: Vec<i64> = headers.iter().map(|o| o.id).collect();
                let items: Vec<OrderItemRow> = order_items::table
                    .filter(order_items::order_id.eq_any(order_ids))
                    .order(order_items::id.asc())
                    .select(OrderItemRow::as_select())
                    .load(conn)?;

                let customer_ids: Vec<i32> = headers
                    .iter()
                    .filter_map(|o| o.customer_id)
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect();
                let customers: Vec<CustomerRow> = if customer_ids.is_empty() {
                    Vec::new()
                } else {
                    customers::table
                        .filter(customers::id.eq_any(customer_ids))
                        .select(CustomerRow::as_select())
                        .load(conn)?
                };

                Ok(assemble_orders(
                    headers.into_iter().map(Into::into).collect(),
                    items.into_iter().map(OrderItemRow::into_keyed_line).collect(),
                    customers.into_iter().map(Into::into).collect(),
                ))
            })
    }
}
