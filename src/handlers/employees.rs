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
    services::employees::EmployeeInput,
    views::EmployeeView,
    AppState,
};

const RESOURCE: Resource = Resource::Employees;

/// Creates the router for employee endpoints
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route("/:id", delete(delete_employee))
}

async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<EmployeeView>>, ApiError> {
    let employees = state
        .services
        .employees
        .list_employees()
        .await
        .map_err(ApiError::on(Action::Fetch, RESOURCE))?;
    Ok(Json(employees))
}

async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<Response, ApiError> {
    let input = accept_json(payload).map_err(ApiError::on(Action::Create, RESOURCE))?;
    let id = state
        .services
        .employees
        .create_employee(input)
        .await
        .map_err(ApiError::on(Action::Create, RESOURCE))?;
    Ok(created_response(RESOURCE, id))
}

async fn delete_employee(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = accept_id(id).map_err(ApiError::on(Action::Delete, RESOURCE))?;
    state
        .services
        .employees
        .delete_employee(id)
        .await
        .map_err(ApiError::on(Action::Delete, RESOURCE))?;
    Ok(deleted_response(RESOURCE))
}
