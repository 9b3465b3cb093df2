//! Chapel Server: church management backend.
//!
//! Main entry point that loads configuration, picks a store backend and
//! starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use chapel_core::config::{AppConfig, DatabaseBackend};
use chapel_core::error::AppError;
use chapel_database::{DatabasePool, Stores};

#[tokio::main]
async fn main() {
    let env = std::env::var("CHAPEL_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Starting Chapel v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Connect the configured store backend and serve.
async fn run(config: AppConfig) -> Result<(), AppError> {
    let stores = match config.database.backend {
        DatabaseBackend::Memory => {
            tracing::warn!("Using the in-memory store backend; data is lost on restart");
            Stores::memory()
        }
        DatabaseBackend::Postgres => {
            let db = DatabasePool::connect(&config.database).await?;
            if config.database.run_migrations {
                chapel_database::migration::run_migrations(db.pool()).await?;
            }
            Stores::postgres(db)
        }
    };

    chapel_api::run_server(config, stores).await
}
