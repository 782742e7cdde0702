//! HTTP API server for the BMI calculator.
//!
//! Exposes the calculator over JSON with a permissive CORS policy,
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all routes.
///
/// Calculator routes are served both at the root and under `/api`, which is
/// where the browser front-end sends its requests.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let calculator = Router::new()
        .route("/", get(routes::home::welcome))
        .route("/calculate-bmi", post(routes::calculator::calculate));

    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .merge(calculator.clone())
        .nest("/api", calculator)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
