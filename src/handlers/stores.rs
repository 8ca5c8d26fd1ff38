use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Response,
    routing::{delete, get},
    Json, Router,
};

use super::common::{accept_id, accept_json, created_response, deleted_response};
use crate::{
    entities::store,
    errors::{Action, ApiError},
    resource::Resource,
    services::stores::StoreInput,
    AppState,
};

const RESOURCE: Resource = Resource::Stores;

/// Creates the router for store endpoints
pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stores).post(create_store))
        .route("/:id", delete(delete_store))
}

async fn list_stores(State(state): State<AppState>) -> Result<Json<Vec<store::Model>>, ApiError> {
    let stores = state
        .services
        .stores
        .list_stores()
        .await
        .map_err(ApiError::on(Action::Fetch, RESOURCE))?;
    Ok(Json(stores))
}

async fn create_store(
    State(state): State<AppState>,
    payload: Result<Json<StoreInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let input = accept_json(payload).map_err(ApiError::on(Action::Create, RESOURCE))?;
    let id = state
        .services
        .stores
        .create_store(input)
        .await
        .map_err(ApiError::on(Action::Create, RESOURCE))?;
    Ok(created_response(RESOURCE, id))
}

async fn delete_store(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = accept_id(id).map_err(ApiError::on(Action::Delete, RESOURCE))?;
    state
        .services
        .stores
        .delete_store(id)
        .await
        .map_err(ApiError::on(Action::Delete, RESOURCE))?;
    Ok(deleted_response(RESOURCE))
}
