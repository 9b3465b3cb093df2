//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use chapel_core::traits::CacheProvider;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let database_connected = match state.stores.health.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Health check: store unreachable");
            false
        }
    };
    let cache_entries = state.cache.entry_count().await.unwrap_or(0);

    let status = if database_connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ApiResponse::ok(HealthResponse {
            status: if database_connected { "ok" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: state.stores.health.backend().to_string(),
            database_connected,
            cache_entries,
        })),
    )
}
