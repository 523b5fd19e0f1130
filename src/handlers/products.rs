use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

use crate::application::catalog_service::ProductService;
use crate::domain::catalog::{NewProduct, Product};
use crate::errors::AppError;

use super::customers::{CreatedResponse, DeletedResponse};
use super::wire::{amount_from_json, serialize_amount};
use super::SharedProductRepository;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    #[schema(value_type = f64)]
    pub price: Number,
    /// `pizza`, `pizzaDoce`, `bebida` or any other label.
    #[serde(rename = "tipo")]
    pub category: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco", serialize_with = "serialize_amount")]
    #[schema(value_type = f64)]
    pub price: BigDecimal,
    #[serde(rename = "tipo")]
    pub category: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            category: p.category,
        }
    }
}

/// GET /produtos
#[utoipa::path(
    get,
    path = "/produtos",
    responses(
        (status = 200, description = "All products", body = [ProductResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "produtos"
)]
pub async fn list_products(
    service: web::Data<ProductService<SharedProductRepository>>,
) -> Result<HttpResponse, AppError> {
    let products = web::block(move || service.list())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<ProductResponse> = products.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /produtos
#[utoipa::path(
    post,
    path = "/produtos",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product added", body = CreatedResponse),
        (status = 400, description = "Invalid product"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "produtos"
)]
pub async fn create_product(
    service: web::Data<ProductService<SharedProductRepository>>,
    body: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let product = NewProduct {
        price: amount_from_json("preco", &body.price)?,
        name: body.name,
        category: body.category,
    };

    let id = web::block(move || service.add(product))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(CreatedResponse { id }))
}

/// DELETE /produtos/{id}
///
/// Past orders keep the name and price captured at checkout.
#[utoipa::path(
    delete,
    path = "/produtos/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product removed", body = DeletedResponse),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "produtos"
)]
pub async fn delete_product(
    service: web::Data<ProductService<SharedProductRepository>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || service.remove(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(DeletedResponse { success: true }))
}
