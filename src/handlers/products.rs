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
    errors::{Action, ApiError},
    resource::Resource,
    services::products::ProductInput,
    views::ProductView,
    AppState,
};

const RESOURCE: Resource = Resource::Products;

/// Creates the router for product endpoints
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", put(update_product).delete(delete_product))
}

async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductView>>, ApiError> {
    let products = state
        .services
        .products
        .list_products()
        .await
        .map_err(ApiError::on(Action::Fetch, RESOURCE))?;
    Ok(Json(products))
}

async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let input = accept_json(payload).map_err(ApiError::on(Action::Create, RESOURCE))?;
    let id = state
        .services
        .products
        .create_product(input)
        .await
        .map_err(ApiError::on(Action::Create, RESOURCE))?;
    Ok(created_response(RESOURCE, id))
}

async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = accept_id(id).map_err(ApiError::on(Action::Update, RESOURCE))?;
    let input = accept_json(payload).map_err(ApiError::on(Action::Update, RESOURCE))?;
    state
        .services
        .products
        .update_product(id, input)
        .await
        .map_err(ApiError::on(Action::Update, RESOURCE))?;
    Ok(updated_response(RESOURCE))
}

async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = accept_id(id).map_err(ApiError::on(Action::Delete, RESOURCE))?;
    state
        .services
        .products
        .delete_product(id)
        .await
        .map_err(ApiError::on(Action::Delete, RESOURCE))?;
    Ok(deleted_response(RESOURCE))
}
