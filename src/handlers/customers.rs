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
    entities::customer,
    errors::{Action, ApiError},
    resource::Resource,
    services::customers::CustomerInput,
    AppState,
};

const RESOURCE: Resource = Resource::Customers;

/// Creates the router for customer endpoints
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/:id", delete(delete_customer))
}

async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<customer::Model>>, ApiError> {
    let customers = state
        .services
        .customers
        .list_customers()
        .await
        .map_err(ApiError::on(Action::Fetch, RESOURCE))?;
    Ok(Json(customers))
}

async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CustomerInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let input = accept_json(payload).map_err(ApiError::on(Action::Create, RESOURCE))?;
    let id = state
        .services
        .customers
        .create_customer(input)
        .await
        .map_err(ApiError::on(Action::Create, RESOURCE))?;
    Ok(created_response(RESOURCE, id))
}

async fn delete_customer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = accept_id(id).map_err(ApiError::on(Action::Delete, RESOURCE))?;
    state
        .services
        .customers
        .delete_customer(id)
        .await
        .map_err(ApiError::on(Action::Delete, RESOURCE))?;
    Ok(deleted_response(RESOURCE))
}
