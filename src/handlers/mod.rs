pub mod customers;
pub mod login;
pub mod orders;
pub mod products;
pub mod reports;
mod wire;

use std::sync::Arc;

use actix_web::web;

use crate::application::catalog_service::{CustomerService, ProductService};
use crate::application::order_service::OrderService;
use crate::application::report_service::ReportService;
use crate::domain::ports::{
    CredentialVerifier, CustomerRepository, OrderRepository, ProductRepository,
};
use crate::errors::AppError;

pub type SharedOrderRepository = Arc<dyn OrderRepository>;
pub type SharedCustomerRepository = Arc<dyn CustomerRepository>;
pub type SharedProductRepository = Arc<dyn ProductRepository>;

/// Everything the routes need, shared across worker threads.
#[derive(Clone)]
pub struct AppServices {
    pub orders: web::Data<OrderService<SharedOrderRepository>>,
    pub reports: web::Data<ReportService<SharedOrderRepository>>,
    pub customers: web::Data<CustomerService<SharedCustomerRepository>>,
    pub products: web::Data<ProductService<SharedProductRepository>>,
    pub staff: web::Data<dyn CredentialVerifier>,
}

impl AppServices {
    pub fn new(
        orders: SharedOrderRepository,
        customers: SharedCustomerRepository,
        products: SharedProductRepository,
        staff: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            orders: web::Data::new(OrderService::new(orders.clone())),
            reports: web::Data::new(ReportService::new(orders)),
            customers: web::Data::new(CustomerService::new(customers)),
            products: web::Data::new(ProductService::new(products)),
            staff: web::Data::from(staff),
        }
    }
}

/// Registers every route and its shared state.
pub fn configure(cfg: &mut web::ServiceConfig, services: &AppServices) {
    cfg.app_data(services.orders.clone())
        .app_data(services.reports.clone())
        .app_data(services.customers.clone())
        .app_data(services.products.clone())
        .app_data(services.staff.clone())
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            AppError::BadRequest(format!("invalid JSON body: {err}")).into()
        }))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| {
            AppError::BadRequest(format!("invalid query string: {err}")).into()
        }))
        .app_data(web::PathConfig::default().error_handler(|err, _req| {
            AppError::BadRequest(format!("invalid path: {err}")).into()
        }))
        .service(
            web::scope("/pedidos")
                .route("", web::post().to(orders::submit_order))
                .route("", web::get().to(orders::list_orders)),
        )
        .route("/relatorio", web::get().to(reports::daily_report))
        .service(
            web::scope("/clientes")
                .route("", web::get().to(customers::list_customers))
                .route("", web::post().to(customers::create_customer))
                .route("/{id}", web::delete().to(customers::delete_customer)),
        )
        .service(
            web::scope("/produtos")
                .route("", web::get().to(products::list_products))
                .route("", web::post().to(products::create_product))
                .route("/{id}", web::delete().to(products::delete_product)),
        )
        .service(
            web::scope("/login")
                .route("/funcionario", web::post().to(login::staff_login))
                .route("/cliente", web::post().to(login::customer_login)),
        );
}
