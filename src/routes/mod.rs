//! Router assembly: resource routes under `/api` plus middleware.

mod common;
mod products;

pub use common::common_routes;
pub use products::product_routes;

use crate::config::Config;
use crate::handlers::route_not_found;
use crate::response::Envelope;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as CorsAny, CorsLayer},
    trace::TraceLayer,
};

/// All API routes, relative to the `/api` mount point.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(product_routes(state.clone()))
        .merge(common_routes(state))
        .fallback(route_not_found)
}

/// Full application: `/api` routes, 404 fallback, panic catcher, body limit, CORS, tracing.
pub fn app(state: AppState, config: &Config) -> Router {
    Router::new()
        .nest("/api", api_routes(state))
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(CorsAny)
    } else {
        let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        AllowOrigin::list(origins)
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(CorsAny)
        .allow_headers(CorsAny)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Envelope::<()>::failure("Something went wrong!", Some(detail))),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn panic_response_uses_envelope() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Something went wrong!");
        assert_eq!(body["message"], "boom");
    }
}
