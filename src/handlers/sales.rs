use axum::{
    extract::{rejection::JsonRejection, State},
    response::Response,
    routing::get,
    Json, Router,
};

use super::common::{accept_json, created_response};
use crate::{
    errors::{Action, ApiError},
    resource::Resource,
    services::sales::SaleInput,
    views::SaleView,
    AppState,
};

const RESOURCE: Resource = Resource::Sales;

/// Sales are append-only
pub fn sale_routes() -> Router<AppState> {
    Router::new().route("/", get(list_sales).post(create_sale))
}

async fn list_sales(State(state): State<AppState>) -> Result<Json<Vec<SaleView>>, ApiError> {
    let sales = state
        .services
        .sales
        .list_sales()
        .await
        .map_err(ApiError::on(Action::Fetch, RESOURCE))?;
    Ok(Json(sales))
}

async fn create_sale(
    State(state): State<AppState>,
    payload: Result<Json<SaleInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let input = accept_json(payload).map_err(ApiError::on(Action::Create, RESOURCE))?;
    let id = state
        .services
        .sales
        .create_sale(input)
        .await
        .map_err(ApiError::on(Action::Create, RESOURCE))?;
    Ok(created_response(RESOURCE, id))
}
