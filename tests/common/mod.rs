#![allow(dead_code)]

use std::net::SocketAddr;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use supermarket_admin::{
    build_router, config::AppConfig, db, db::DbPool, resource::Resource, AppState,
};
use tempfile::TempDir;
use tower::ServiceExt;

/// Application router backed by a freshly migrated, file-backed SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    _db_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_dir = tempfile::tempdir().expect("create temp dir for test database");
        let db_path = db_dir.path().join("supermarket_test.db");

        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_path.display()),
            0,
            "development",
        );
        cfg.host = "127.0.0.1".to_string();
        cfg.static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/public").to_string();
        cfg.db_max_connections = 4;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(pool, cfg);
        let router = build_router(state.clone());

        Self {
            router,
            state,
            _db_dir: db_dir,
        }
    }

    pub fn db(&self) -> &DbPool {
        &self.state.db
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Send a request against the router, with an optional JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
            }
            None => Body::empty(),
        };
        self.send(builder.body(body).expect("failed to build request")).await
    }

    /// Send a body verbatim with the given content type.
    pub async fn request_raw(
        &self,
        method: Method,
        uri: &str,
        content_type: &str,
        body: &str,
    ) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .expect("failed to build request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    pub async fn json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let response = self.request(method, uri, body).await;
        let status = response.status();
        (status, body_json(response).await)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.json(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.json(Method::DELETE, uri, None).await
    }

    /// Creates a record through the API and returns its new id.
    pub async fn create(&self, resource: Resource, body: Value) -> i64 {
        let (status, created) = self.post(&format!("/api/{}", resource.path()), body).await;
        assert_eq!(status, StatusCode::CREATED, "create {resource} failed: {created}");
        created[resource.id_field()]
            .as_i64()
            .unwrap_or_else(|| panic!("create {resource} returned no id: {created}"))
    }

    /// The current list of a collection as JSON rows.
    pub async fn list(&self, resource: Resource) -> Vec<Value> {
        let (status, body) = self.get(&format!("/api/{}", resource.path())).await;
        assert_eq!(status, StatusCode::OK, "list {resource} failed: {body}");
        body.as_array().cloned().expect("list response is an array")
    }

    /// Serves the router on an ephemeral local port for HTTP clients.
    pub async fn serve(&self) -> (SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");
        let router = self.router();
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("test server failed");
        });
        (addr, handle)
    }
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

/// Row in `rows` whose id field equals `id`.
pub fn find_row<'a>(rows: &'a [Value], resource: Resource, id: i64) -> Option<&'a Value> {
    rows.iter()
        .find(|row| row[resource.id_field()].as_i64() == Some(id))
}
