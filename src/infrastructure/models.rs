use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::catalog::{Customer, Product};
use crate::domain::order::{OrderHeader, OrderLineView};
use crate::schema::{customers, order_items, orders, products};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.name,
            phone: row.phone,
            address: row.address,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub category: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow {
    pub name: String,
    pub price: BigDecimal,
    pub category: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            price: row.price,
            category: row.category,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i64,
    pub customer_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub total: BigDecimal,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub customer_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub total: BigDecimal,
}

impl From<OrderRow> for OrderHeader {
    fn from(row: OrderRow) -> Self {
        OrderHeader {
            id: row.id,
            customer_id: row.customer_id,
            created_at: row.created_at,
            total: row.total,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: i64,
    pub order_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub category: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow {
    pub order_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub category: Option<String>,
}

impl OrderItemRow {
    pub fn into_keyed_line(self) -> (i64, OrderLineView) {
        (
            self.order_id,
            OrderLineView {
                product_name: self.product_name,
                quantity: self.quantity,
                unit_price: self.unit_price,
                category: self.category,
            },
        )
    }
}
