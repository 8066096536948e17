//! Common routes: health and advisory next id.

use crate::handlers::{health, next_id, route_not_found};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health).fallback(route_not_found))
        .route("/next-id", get(next_id).fallback(route_not_found))
        .with_state(state)
}
