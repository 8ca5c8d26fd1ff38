use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::DbErr;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::error;

use crate::middleware_helpers::request_id::current_request_id;
use crate::resource::Resource;

/// Body of every failed API response: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Failures raised below the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for ServiceError {
    fn from(rejection: PathRejection) -> Self {
        ServiceError::InvalidInput(rejection.body_text())
    }
}

/// The operation a handler was attempting when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    Fetch,
    Create,
    Update,
    Delete,
}

/// Error returned from HTTP handlers.
///
/// Clients only ever see a generic `Failed to <verb> <resource>` message with
/// status 500; the underlying cause is logged.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
    #[source]
    source: ServiceError,
}

impl ApiError {
    pub fn new(message: impl Into<String>, source: impl Into<ServiceError>) -> Self {
        Self {
            message: message.into(),
            source: source.into(),
        }
    }

    /// `Failed to fetch <plural>` / `Failed to <verb> <singular>`.
    pub fn failed(action: Action, resource: Resource, source: impl Into<ServiceError>) -> Self {
        let noun = match action {
            Action::Fetch => resource.path(),
            _ => resource.singular(),
        };
        Self::new(format!("Failed to {action} {noun}"), source)
    }

    /// Adapter for `map_err`, e.g. `.map_err(ApiError::on(Action::Create, Resource::Stores))`.
    pub fn on<E>(action: Action, resource: Resource) -> impl FnOnce(E) -> ApiError
    where
        E: Into<ServiceError>,
    {
        move |err| ApiError::failed(action, resource, err)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn service_error(&self) -> &ServiceError {
        &self.source
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = current_request_id();
        error!(
            request_id = request_id.as_ref().map(|id| id.as_str()),
            error = %self.source,
            "{}",
            self.message
        );

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(self.message)),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> ErrorResponse {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn fetch_messages_use_plural_nouns() {
        let err = ApiError::failed(
            Action::Fetch,
            Resource::Suppliers,
            DbErr::Custom("boom".into()),
        );
        assert_eq!(err.message(), "Failed to fetch suppliers");
    }

    #[test]
    fn write_messages_use_singular_nouns() {
        let cases = [
            (Action::Create, Resource::Products, "Failed to create product"),
            (Action::Update, Resource::Suppliers, "Failed to update supplier"),
            (Action::Delete, Resource::Stores, "Failed to delete store"),
        ];
        for (action, resource, expected) in cases {
            let err = ApiError::failed(action, resource, DbErr::Custom("x".into()));
            assert_eq!(err.message(), expected);
        }
    }

    #[tokio::test]
    async fn api_error_hides_cause_behind_generic_500() {
        let response = ApiError::failed(
            Action::Create,
            Resource::Stores,
            DbErr::Custom("UNIQUE constraint failed: STORE.storeNumber".into()),
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let payload = body_of(response).await;
        assert_eq!(payload, ErrorResponse::new("Failed to create store"));
    }

    #[test]
    fn map_err_adapter_keeps_source() {
        let result: Result<(), DbErr> = Err(DbErr::Custom("gone".into()));
        let err = result
            .map_err(ApiError::on(Action::Delete, Resource::Customers))
            .unwrap_err();
        assert_eq!(err.message(), "Failed to delete customer");
        assert!(matches!(err.service_error(), ServiceError::DatabaseError(_)));
    }
}
