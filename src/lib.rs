pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use actix_web::{middleware::Logger, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::staff_auth::ConfiguredStaffVerifier;
use crate::config::AppConfig;
use crate::handlers::AppServices;
use crate::infrastructure::{
    DieselCustomerRepository, DieselOrderRepository, DieselProductRepository,
};

pub use config::ConfigError;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::submit_order,
        handlers::orders::list_orders,
        handlers::reports::daily_report,
        handlers::customers::list_customers,
        handlers::customers::create_customer,
        handlers::customers::delete_customer,
        handlers::products::list_products,
        handlers::products::create_product,
        handlers::products::delete_product,
        handlers::login::staff_login,
        handlers::login::customer_login,
    ),
    tags(
        (name = "pedidos", description = "Order submission and listing"),
        (name = "relatorio", description = "Daily sales report"),
        (name = "clientes", description = "Customer registry"),
        (name = "produtos", description = "Product catalogue"),
        (name = "login", description = "Staff and customer login"),
    )
)]
pub struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Wire the diesel repositories and the configured staff verifier into the
/// services the routes use.
pub fn build_services(pool: DbPool, config: &AppConfig) -> AppServices {
    AppServices::new(
        Arc::new(DieselOrderRepository::new(pool.clone(), config.submit_timeout)),
        Arc::new(DieselCustomerRepository::new(pool.clone())),
        Arc::new(DieselProductRepository::new(pool)),
        Arc::new(ConfiguredStaffVerifier::new(config.staff.clone())),
    )
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    services: AppServices,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let openapi = ApiDoc::openapi();
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| handlers::configure(cfg, &services))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
