use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use riderwatch::config::{self, Config};
use riderwatch::middleware::{BearerAuth, JwtKeys, RateLimiter};
use riderwatch::modules;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "riderwatch=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting Riderwatch API");
    tracing::info!("Environment: {}", config.app.env);

    // Create database connection pool and apply migrations
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");
    config::database::run_migrations(&db_pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!(
        "Database ready ({} max connections)",
        config.database.max_connections
    );

    let keys = JwtKeys::from_secret(&config.auth.jwt_secret, config.auth.token_expiry_days);
    let rate_limit = config.security.rate_limit_per_minute;

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(keys.clone()))
            .configure(modules::configure)
            .wrap(BearerAuth::new(keys.clone()))
            .wrap(RateLimiter::new(rate_limit))
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
