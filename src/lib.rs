//! Supermarket administration backend.
//!
//! A thin JSON API over the supermarket's relational store (suppliers,
//! stores, products, staff, customers, orders, sales and payments), the
//! static dashboard page, and a typed client for driving that dashboard
//! from Rust.

use std::{any::Any, sync::Arc};

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    services::ServeDir,
    trace::{DefaultOnRequest, DefaultOnResponse, HttpMakeClassifier, TraceLayer},
    LatencyUnit,
};
use tracing::{error, info, Level};

pub mod config;
pub mod dashboard;
pub mod db;
pub mod entities;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod middleware_helpers;
pub mod resource;
pub mod services;
pub mod views;

use crate::{
    config::AppConfig,
    db::DbPool,
    errors::ErrorResponse,
    middleware_helpers::request_id_middleware,
    services::AppServices,
};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
    pub config: AppConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig) -> Self {
        let db = Arc::new(db);
        Self {
            services: AppServices::new(db.clone()),
            db,
            config,
        }
    }
}

/// API routes, health check and the static dashboard, with the HTTP layers applied
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .nest("/api", handlers::api_routes())
        .route("/health", get(handlers::health::health_check))
        .fallback_service(static_dir)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(http_trace_layer())
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// One line when a request arrives and one when its response is ready; 5xx
/// responses are additionally logged as failures
fn http_trace_layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

/// CORS from config: explicit origins, else permissive in development or on opt-in
fn cors_layer(cfg: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .cors_origins()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if !origins.is_empty() {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(AnyOrigin)
            .allow_headers(AnyOrigin)
    } else if cfg.should_allow_permissive_cors() {
        info!(
            "Using permissive CORS because explicit origins were not configured ({})",
            if cfg.is_development() {
                "development environment"
            } else {
                "explicit override enabled"
            }
        );
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn each_request_is_logged_once_on_arrival_and_once_on_completion() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(http_trace_layer());
        let response = app
            .oneshot(Request::get("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("started processing request").count(), 1);
        assert_eq!(output.matches("finished processing request").count(), 1);
        assert!(output.contains("status=200"));
    }
}
