//! SUSHI-Lite report handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::config::PlatformConfig;
use crate::report::{assemble_tr_j1, CounterReport, RawReportParams, ReportRequest, SushiError};
use crate::stats::{ContextResolver, StatsSource};

pub struct AppState {
    pub stats: Arc<dyn StatsSource>,
    pub contexts: Arc<dyn ContextResolver>,
    pub platform: PlatformConfig,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub message: String,
}

/// Provide the TR_J1 COUNTER report: total abstract and galley views per
/// journal over the requested period.
pub async fn tr_j1(
    State(state): State<Arc<AppState>>,
    Path(context): Path<String>,
    Query(params): Query<RawReportParams>,
) -> Result<Json<CounterReport>, SushiError> {
    // The endpoint is only reachable under a context path, never site-wide
    if state.contexts.resolve_path(&context).await?.is_none() {
        return Err(SushiError::MissingScopeContext);
    }

    let request = ReportRequest::validate(params)?;

    let rows = state
        .stats
        .ordered_context_totals(&request.stats_query())
        .await?;

    let report = assemble_tr_j1(&request, rows, state.contexts.as_ref(), &state.platform).await?;

    Ok(Json(report))
}

/// Health check endpoint
pub async fn health_check() -> Json<SuccessResponse> {
    Json(SuccessResponse {
        message: "OK".to_string(),
    })
}
