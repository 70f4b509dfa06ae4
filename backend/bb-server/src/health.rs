use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;

/// GET /health - Component status including the bell hub
pub async fn health_check(State(state): State<AppState>) -> Response {
    let hub = &state.hub;
    let shut_down = hub.is_shut_down();
    let config = hub.config();

    let health = json!({
        "status": if shut_down { "shutting_down" } else { "healthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "hub": if shut_down { "shut_down" } else { "operational" },
        },
        "hub": {
            "subscribers": hub.subscriber_count(),
            "subscriberCapacity": config.subscriber_capacity,
            "legacyCapacity": config.legacy_capacity,
            "mirrorToLegacy": config.mirror_to_legacy,
        },
        "startedAt": state.started_at.to_rfc3339(),
        "timestamp": Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe: not ready once the hub is torn down
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.hub.is_shut_down() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Shutting down").into_response();
    }
    (StatusCode::OK, "Ready").into_response()
}
