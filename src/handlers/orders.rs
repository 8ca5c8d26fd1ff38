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
    errors::{Action, ApiError},
    resource::Resource,
    services::orders::OrderInput,
    views::OrderView,
    AppState,
};

const RESOURCE: Resource = Resource::Orders;

/// Creates the router for stock order endpoints
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", delete(delete_order))
}

async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<OrderView>>, ApiError> {
    let orders = state
        .services
        .orders
        .list_orders()
        .await
        .map_err(ApiError::on(Action::Fetch, RESOURCE))?;
    Ok(Json(orders))
}

async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let input = accept_json(payload).map_err(ApiError::on(Action::Create, RESOURCE))?;
    let id = state
        .services
        .orders
        .create_order(input)
        .await
        .map_err(ApiError::on(Action::Create, RESOURCE))?;
    Ok(created_response(RESOURCE, id))
}

async fn delete_order(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = accept_id(id).map_err(ApiError::on(Action::Delete, RESOURCE))?;
    state
        .services
        .orders
        .delete_order(id)
        .await
        .map_err(ApiError::on(Action::Delete, RESOURCE))?;
    Ok(deleted_response(RESOURCE))
}
