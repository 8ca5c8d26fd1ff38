use std::{collections::BTreeMap, time::Duration};

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::{
    errors::ErrorResponse, handlers::common::MessageResponse, resource::Resource,
    views::DashboardStats,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Flat field-name to value map, the shape a submitted form serializes to.
pub type FormData = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// The server's `error` string for non-2xx responses
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Status { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// What the server returned for a successful create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReceipt {
    pub id: Option<i64>,
    pub message: Option<String>,
}

impl CreateReceipt {
    fn from_body(resource: Resource, body: &Value) -> Self {
        Self {
            id: body.get(resource.id_field()).and_then(Value::as_i64),
            message: body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Typed access to the `/api` routes of a running server
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    #[instrument(skip(self))]
    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, ClientError> {
        let response = self.http.get(self.url(resource.path())).send().await?;
        decode(response).await
    }

    #[instrument(skip(self, form))]
    pub async fn create(&self, resource: Resource, form: &FormData) -> Result<CreateReceipt, ClientError> {
        let response = self
            .http
            .post(self.url(resource.path()))
            .json(form)
            .send()
            .await?;
        let body: Value = decode(response).await?;
        let receipt = CreateReceipt::from_body(resource, &body);
        debug!(id = ?receipt.id, "Record created");
        Ok(receipt)
    }

    /// Returns the server's confirmation message
    #[instrument(skip(self))]
    pub async fn delete(&self, resource: Resource, id: i64) -> Result<String, ClientError> {
        let path = format!("{}/{}", resource.path(), id);
        let response = self.http.delete(self.url(&path)).send().await?;
        let body: MessageResponse = decode(response).await?;
        Ok(body.message)
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<DashboardStats, ClientError> {
        let response = self.http.get(self.url("dashboard/stats")).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorResponse>(&bytes)
            .map(|body| body.error)
            .unwrap_or_else(|_| String::from_utf8_lossy(&bytes).trim().to_string());
        warn!(%status, %message, "Request failed");
        return Err(ClientError::Status { status, message });
    }

    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn receipt_reads_resource_specific_id_field() {
        let body = json!({"storeID": 12, "message": "Store created successfully"});
        let receipt = CreateReceipt::from_body(Resource::Stores, &body);
        assert_eq!(receipt.id, Some(12));
        assert_eq!(receipt.message.as_deref(), Some("Store created successfully"));

        let other = CreateReceipt::from_body(Resource::Products, &body);
        assert_eq!(other.id, None);
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let client = ApiClient::with_client(Client::new(), "http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("stores"), "http://localhost:3000/api/stores");
    }
}
