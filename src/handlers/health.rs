use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{db, AppState};

/// Liveness report; always served with status 200
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub timestamp: String,
}

/// Pings the pool and reports whether the store is reachable
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, database) = match db::check_connection(&state.db).await {
        Ok(()) => ("healthy", "connected"),
        Err(err) => {
            warn!(error = %err, "Health check could not reach the database");
            ("unhealthy", "disconnected")
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        database: database.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
