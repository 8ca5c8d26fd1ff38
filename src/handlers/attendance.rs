use axum::{extract::State, routing::get, Json, Router};

use crate::{
    errors::{Action, ApiError},
    resource::Resource,
    views::AttendanceView,
    AppState,
};

/// Attendance is read-only over HTTP
pub fn attendance_routes() -> Router<AppState> {
    Router::new().route("/", get(list_attendance))
}

async fn list_attendance(
    State(state): State<AppState>,
) -> Result<Json<Vec<AttendanceView>>, ApiError> {
    let records = state
        .services
        .attendance
        .list_attendance()
        .await
        .map_err(ApiError::on(Action::Fetch, Resource::Attendance))?;
    Ok(Json(records))
}
