use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Response,
    routing::{get, put},
    Json, Router,
};

use super::common::{accept_id, accept_json, created_response, deleted_response, updated_response};
use crate::{
    entities::supplier,
    errors::{Action, ApiError},
    resource::Resource,
    services::suppliers::SupplierInput,
    AppState,
};

const RESOURCE: Resource = Resource::Suppliers;

/// Creates the router for supplier endpoints
pub fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route("/:id", put(update_supplier).delete(delete_supplier))
}

/// List all suppliers
async fn list_suppliers(
    State(state): State<AppState>,
) -> Result<Json<Vec<supplier::Model>>, ApiError> {
    let suppliers = state
        .services
        .suppliers
        .list_suppliers()
        .await
        .map_err(ApiError::on(Action::Fetch, RESOURCE))?;
    Ok(Json(suppliers))
}

/// Create a new supplier
async fn create_supplier(
    State(state): State<AppState>,
    payload: Result<Json<SupplierInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let input = accept_json(payload).map_err(ApiError::on(Action::Create, RESOURCE))?;
    let id = state
        .services
        .suppliers
        .create_supplier(input)
        .await
        .map_err(ApiError::on(Action::Create, RESOURCE))?;
    Ok(created_response(RESOURCE, id))
}

/// Replace a supplier's details
async fn update_supplier(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<SupplierInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = accept_id(id).map_err(ApiError::on(Action::Update, RESOURCE))?;
    let input = accept_json(payload).map_err(ApiError::on(Action::Update, RESOURCE))?;
    state
        .services
        .suppliers
        .update_supplier(id, input)
        .await
        .map_err(ApiError::on(Action::Update, RESOURCE))?;
    Ok(updated_response(RESOURCE))
}

/// Delete a supplier
async fn delete_supplier(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = accept_id(id).map_err(ApiError::on(Action::Delete, RESOURCE))?;
    state
        .services
        .suppliers
        .delete_supplier(id)
        .await
        .map_err(ApiError::on(Action::Delete, RESOURCE))?;
    Ok(deleted_response(RESOURCE))
}
