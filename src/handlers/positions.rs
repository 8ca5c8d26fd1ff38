use axum::{
    extract::{rejection::JsonRejection, State},
    response::Response,
    routing::get,
    Json, Router,
};

use super::common::{accept_json, created_response};
use crate::{
    entities::position,
    errors::{Action, ApiError},
    resource::Resource,
    services::positions::PositionInput,
    AppState,
};

const RESOURCE: Resource = Resource::Positions;

/// Positions can be listed and added; they are never removed
pub fn position_routes() -> Router<AppState> {
    Router::new().route("/", get(list_positions).post(create_position))
}

async fn list_positions(State(state): State<AppState>) -> Result<Json<Vec<position::Model>>, ApiError> {
    let positions = state
        .services
        .positions
        .list_positions()
        .await
        .map_err(ApiError::on(Action::Fetch, RESOURCE))?;
    Ok(Json(positions))
}

async fn create_position(
    State(state): State<AppState>,
    payload: Result<Json<PositionInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let input = accept_json(payload).map_err(ApiError::on(Action::Create, RESOURCE))?;
    let id = state
        .services
        .positions
        .create_position(input)
        .await
        .map_err(ApiError::on(Action::Create, RESOURCE))?;
    Ok(created_response(RESOURCE, id))
}
