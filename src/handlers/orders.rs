use actix_web::{web, HttpResponse};
use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

use crate::application::order_service::OrderService;
use crate::domain::order::{OrderCustomer, OrderLineInput, OrderLineView, OrderView, GUEST_NAME};
use crate::errors::AppError;

use super::wire::{amount_from_json, serialize_amount};
use super::SharedOrderRepository;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitOrderItemRequest {
    #[serde(rename = "produto")]
    pub product_name: String,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "preco")]
    #[schema(value_type = f64)]
    pub unit_price: Number,
    #[serde(rename = "tipo", default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitOrderRequest {
    #[serde(rename = "clienteId", default)]
    pub customer_id: Option<i32>,
    #[serde(rename = "itens")]
    pub items: Vec<SubmitOrderItemRequest>,
    /// Declared by the client and stored as given. Defaults to 0.
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub total: Option<Number>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitOrderResponse {
    pub success: bool,
    #[serde(rename = "pedidoId")]
    pub order_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    #[serde(rename = "produto")]
    pub product_name: String,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "preco", serialize_with = "serialize_amount")]
    #[schema(value_type = f64)]
    pub unit_price: BigDecimal,
    #[serde(rename = "tipo")]
    pub category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderCustomerResponse {
    /// `null` for walk-in orders.
    pub id: Option<i32>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "endereco")]
    pub address: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    /// Creation time as `dd/mm/yyyy, HH:MM:SS`.
    #[serde(rename = "data")]
    pub created_at: String,
    #[serde(serialize_with = "serialize_amount")]
    #[schema(value_type = f64)]
    pub total: BigDecimal,
    #[serde(rename = "itens")]
    pub items: Vec<OrderItemResponse>,
    #[serde(rename = "cliente")]
    pub customer: OrderCustomerResponse,
}

impl SubmitOrderItemRequest {
    fn into_input(self, idx: usize) -> Result<OrderLineInput, AppError> {
        Ok(OrderLineInput {
            unit_price: amount_from_json(&format!("itens[{idx}].preco"), &self.unit_price)?,
            product_name: self.product_name,
            quantity: self.quantity,
            category: self.category,
        })
    }
}

impl From<OrderLineView> for OrderItemResponse {
    fn from(l: OrderLineView) -> Self {
        Self {
            product_name: l.product_name,
            quantity: l.quantity,
            unit_price: l.unit_price,
            category: l.category,
        }
    }
}

impl From<OrderCustomer> for OrderCustomerResponse {
    fn from(c: OrderCustomer) -> Self {
        match c {
            OrderCustomer::Registered(c) => Self {
                id: Some(c.id),
                name: c.name,
                phone: c.phone,
                address: c.address,
            },
            OrderCustomer::Guest { id } => Self {
                id,
                name: GUEST_NAME.to_string(),
                phone: String::new(),
                address: String::new(),
            },
        }
    }
}

impl From<OrderView> for OrderResponse {
    fn from(o: OrderView) -> Self {
        Self {
            id: o.id,
            created_at: o.created_at.format("%d/%m/%Y, %H:%M:%S").to_string(),
            total: o.total,
            items: o.lines.into_iter().map(Into::into).collect(),
            customer: o.customer.into(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /pedidos
///
/// Records the order and all of its items in a single database transaction;
/// either everything is stored or nothing is.
#[utoipa::path(
    post,
    path = "/pedidos",
    request_body = SubmitOrderRequest,
    responses(
        (status = 200, description = "Order recorded", body = SubmitOrderResponse),
        (status = 400, description = "Invalid order"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "pedidos"
)]
pub async fn submit_order(
    service: web::Data<OrderService<SharedOrderRepository>>,
    body: web::Json<SubmitOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    let lines = body
        .items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| item.into_input(idx))
        .collect::<Result<Vec<_>, _>>()?;
    let total = match &body.total {
        Some(n) => amount_from_json("total", n)?,
        None => BigDecimal::zero(),
    };
    let customer_id = body.customer_id;

    let order_id = web::block(move || service.submit_order(customer_id, lines, total))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(SubmitOrderResponse {
        success: true,
        order_id,
    }))
}

/// GET /pedidos
///
/// Every order, newest first, with its items and customer.
#[utoipa::path(
    get,
    path = "/pedidos",
    responses(
        (status = 200, description = "All orders", body = [OrderResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "pedidos"
)]
pub async fn list_orders(
    service: web::Data<OrderService<SharedOrderRepository>>,
) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.list_orders())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}
