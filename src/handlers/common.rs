use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ServiceError;
use crate::resource::Resource;

/// `{"message": "..."}` body returned by update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// `201` with `{"<entity>ID": id, "message": "<Entity> created successfully"}`
pub fn created_response(resource: Resource, id: i32) -> Response {
    let mut body = Map::new();
    body.insert(resource.id_field().to_string(), Value::from(id));
    body.insert(
        "message".to_string(),
        Value::from(format!("{} created successfully", resource.label())),
    );
    (StatusCode::CREATED, Json(Value::Object(body))).into_response()
}

pub fn updated_response(resource: Resource) -> Response {
    success_response(MessageResponse {
        message: format!("{} updated successfully", resource.label()),
    })
}

pub fn deleted_response(resource: Resource) -> Response {
    success_response(MessageResponse {
        message: format!("{} deleted successfully", resource.label()),
    })
}

/// Unwraps a JSON body, turning a rejection into a service error
pub fn accept_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ServiceError> {
    payload.map(|Json(body)| body).map_err(ServiceError::from)
}

/// Unwraps an `:id` path segment, turning a rejection into a service error
pub fn accept_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, ServiceError> {
    id.map(|Path(id)| id).map_err(ServiceError::from)
}
