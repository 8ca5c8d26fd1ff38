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
    services::payments::PaymentInput,
    views::PaymentView,
    AppState,
};

const RESOURCE: Resource = Resource::Payments;

/// Payments are append-only
pub fn payment_routes() -> Router<AppState> {
    Router::new().route("/", get(list_payments).post(create_payment))
}

async fn list_payments(State(state): State<AppState>) -> Result<Json<Vec<PaymentView>>, ApiError> {
    let payments = state
        .services
        .payments
        .list_payments()
        .await
        .map_err(ApiError::on(Action::Fetch, RESOURCE))?;
    Ok(Json(payments))
}

async fn create_payment(
    State(state): State<AppState>,
    payload: Result<Json<PaymentInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let input = accept_json(payload).map_err(ApiError::on(Action::Create, RESOURCE))?;
    let id = state
        .services
        .payments
        .create_payment(input)
        .await
        .map_err(ApiError::on(Action::Create, RESOURCE))?;
    Ok(created_response(RESOURCE, id))
}
