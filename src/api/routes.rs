use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::PlatformConfig;
use crate::stats::{ContextResolver, StatsSource};

use super::sushi::{health_check, tr_j1, AppState};

/// Static route table; wiring is decided here at construction time.
pub fn create_router(
    stats: Arc<dyn StatsSource>,
    contexts: Arc<dyn ContextResolver>,
    platform: PlatformConfig,
) -> Router {
    let state = Arc::new(AppState {
        stats,
        contexts,
        platform,
    });

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/{context}/stats/publications/sushi/reports/tr_j1",
            get(tr_j1),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
