use std::env;
mod app;
mod config;
mod db;
mod docs;
mod error;
mod handlers;
mod response;
mod services;

use anyhow::Context;
use app::build_router;
use config::Config;
use db::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Without RUST_LOG, keep our crate verbose and the HTTP stack quiet
        tracing_subscriber::EnvFilter::new(
            "info,animal_avatar=debug,hyper_util=warn,tower_http=info",
        )
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Opens the pool and creates the tables if needed
fn init_database(config: &Config) -> anyhow::Result<Database> {
    let database = Database::connect(&config.database_url, config.db_pool_max_size)?;
    let mut conn = database
        .connection()
        .context("Failed to check out a connection for schema setup")?;
    db::bootstrap::ensure_schema(&mut conn)?;
    tracing::info!(pool_size = database.max_size(), "Database ready");
    Ok(database)
}

// ----------------- Main -----------------

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    setup_logging();
    tracing::info!("Starting animal-avatar...");

    let config = Config::from_env()?;

    // r2d2 blocks while it fills the pool
    let database = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || init_database(&config)).await??
    };
    let app = build_router(database);

    if env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok() {
        tracing::info!("Running in Lambda mode");
        lambda_http::run(app).await
    } else {
        tracing::info!(
            environment = config.environment.as_str(),
            "Running in local HTTP server mode"
        );
        let addr = config.bind_address();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("🚀 Server running at http://{}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
