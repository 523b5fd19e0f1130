use dotenvy::dotenv;
use pizzeria_service::config::AppConfig;
use pizzeria_service::{build_server, build_services, create_pool, run_migrations};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let pool = create_pool(
        &config.database_url,
        config.pool_max_size,
        config.connect_timeout,
    )
    .map_err(std::io::Error::other)?;
    run_migrations(&pool).map_err(std::io::Error::other)?;

    if config.staff.is_none() {
        log::warn!("STAFF_LOGIN/STAFF_PASSWORD not set; staff login is disabled");
    }
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let services = build_services(pool, &config);
    build_server(services, &config.host, config.port)?.await
}
