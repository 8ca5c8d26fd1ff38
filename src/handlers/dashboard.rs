use axum::{extract::State, routing::get, Json, Router};

use crate::{errors::ApiError, views::DashboardStats, AppState};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

/// Headline counters for the landing page
async fn get_stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, ApiError> {
    let stats = state
        .services
        .dashboard
        .get_stats()
        .await
        .map_err(|e| ApiError::new("Failed to fetch dashboard stats", e))?;
    Ok(Json(stats))
}
