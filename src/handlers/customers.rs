use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::catalog_service::CustomerService;
use crate::domain::catalog::{Customer, NewCustomer};
use crate::errors::AppError;

use super::SharedCustomerRepository;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "endereco", default)]
    pub address: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerResponse {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "endereco")]
    pub address: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub success: bool,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            phone: c.phone,
            address: c.address,
        }
    }
}

/// GET /clientes
#[utoipa::path(
    get,
    path = "/clientes",
    responses(
        (status = 200, description = "All customers", body = [CustomerResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "clientes"
)]
pub async fn list_customers(
    service: web::Data<CustomerService<SharedCustomerRepository>>,
) -> Result<HttpResponse, AppError> {
    let customers = web::block(move || service.list())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<CustomerResponse> = customers.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /clientes
#[utoipa::path(
    post,
    path = "/clientes",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Customer registered", body = CreatedResponse),
        (status = 400, description = "Name or phone missing"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "clientes"
)]
pub async fn create_customer(
    service: web::Data<CustomerService<SharedCustomerRepository>>,
    body: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let customer = NewCustomer {
        name: body.name,
        phone: body.phone,
        address: body.address,
    };

    let id = web::block(move || service.register(customer))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(CreatedResponse { id }))
}

/// DELETE /clientes/{id}
///
/// Orders placed by the customer stay and list as guest orders.
#[utoipa::path(
    delete,
    path = "/clientes/{id}",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer removed", body = DeletedResponse),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "clientes"
)]
pub async fn delete_customer(
    service: web::Data<CustomerService<SharedCustomerRepository>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || service.remove(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(DeletedResponse { success: true }))
}
