mod api;
mod config;
mod report;
mod stats;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use config::{Config, DatabaseBackend};
use stats::{ContextResolver, PostgresStatsStore, SqliteStatsStore, StatsSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration");

    // Initialize the stats store; it serves as both the aggregation source
    // and the context resolver for the report pipeline
    let (stats_source, context_resolver): (Arc<dyn StatsSource>, Arc<dyn ContextResolver>) =
        match config.database.backend {
            DatabaseBackend::Sqlite => {
                info!("Using SQLite stats store: {}", config.database.url);
                let store = Arc::new(
                    SqliteStatsStore::new(&config.database.url, config.database.max_connections)
                        .await?,
                );
                store.init().await?;
                (store.clone(), store)
            }
            DatabaseBackend::Postgres => {
                info!("Using PostgreSQL stats store: {}", config.database.url);
                let store = Arc::new(
                    PostgresStatsStore::new(&config.database.url, config.database.max_connections)
                        .await?,
                );
                store.init().await?;
                (store.clone(), store)
            }
        };
    info!("Stats store initialized");

    let router = api::create_router(stats_source, context_resolver, config.platform.clone());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 SUSHI-Lite server listening on http://{}", addr);
    info!(
        "   - TR_J1 report at http://{}/<context>/stats/publications/sushi/reports/tr_j1",
        addr
    );

    axum::serve(listener, router).await?;

    Ok(())
}
