use axum::{extract::State, http::StatusCode, Json};
use common::types::Health;
use tracing::warn;

use crate::state::ServerState;

/// `GET /health`: 200 while the database answers a ping, 503 otherwise.
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<Health>) {
    match state.albums.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health::ok())),
        Err(e) => {
            warn!(error = %e, "health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health::unavailable()))
        }
    }
}
