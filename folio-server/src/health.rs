use crate::state::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health(State(state): State<AppState>) -> Response {
    let database = match probe_database(&state).await {
        Ok(()) => "operational",
        Err(()) => "unreachable",
    };

    let healthy = database == "operational";
    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(body)).into_response()
}

/// GET /live - liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    // If we can respond, we're alive
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe (ready to accept traffic?)
pub async fn readiness(State(state): State<AppState>) -> Response {
    match probe_database(&state).await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(()) => (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response(),
    }
}

async fn probe_database(state: &AppState) -> Result<(), ()> {
    let pool = state.db.acquire().await.map_err(|e| {
        log::warn!("Health probe failed to acquire pool: {}", e);
    })?;

    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            log::warn!("Health probe query failed: {}", e);
        })
}
