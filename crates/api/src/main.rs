use anyhow::Result;
use std::net::SocketAddr;
use tracing::{info, warn};

use apollospark_api::{app, config, middleware, services};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics()?;

    info!("Starting ApolloSpark API v{}", env!("CARGO_PKG_VERSION"));

    // The pool connects on first use, so the process starts even when the
    // database is down; /health reports it.
    let db_config: persistence::db::DatabaseConfig = (&config.database).into();
    let pool = persistence::db::create_pool(&db_config)?;

    info!("Running database migrations...");
    if persistence::db::run_migrations_tolerant(&pool).await {
        info!("Migrations completed");
    }

    match services::admin_bootstrap::bootstrap_admin(&pool, &config.admin).await {
        Ok(outcome) => info!(?outcome, "Admin bootstrap finished"),
        Err(e) => warn!(error = %e, "Admin bootstrap failed"),
    }

    let addr = config.socket_addr()?;
    let app = app::create_app(config, pool);

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
