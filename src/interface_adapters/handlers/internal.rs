use axum::{extract::State, Json};

use crate::frameworks::db;
use crate::interface_adapters::protocol::{ConfigResponse, HealthResponse};
use crate::interface_adapters::state::AppState;

// Debug health report. The database field reflects a live ping, not the
// startup attempt, so it recovers once the deployment becomes reachable.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match &state.db {
        None => "unconfigured",
        Some(db) => match db::ping(db).await {
            Ok(()) => "connected",
            Err(_) => "unreachable",
        },
    };

    Json(HealthResponse {
        status: "ok",
        database,
    })
}

// Redacted runtime configuration echo for debugging deployments.
pub async fn config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        port: state.config.port,
        allow_all_origins: state.config.origin_policy.is_allow_all(),
        allowed_origins: state.config.origin_policy.origins().to_vec(),
        internal_routes: state.config.expose_internal_routes,
    })
}
