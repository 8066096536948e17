//! Product resource routes.

use crate::handlers::{create, delete_all, delete_one, list, read, route_not_found, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(list)
                .post(create)
                .delete(delete_all)
                .fallback(route_not_found),
        )
        .route(
            "/products/:id",
            get(read)
                .put(update)
                .delete(delete_one)
                .fallback(route_not_found),
        )
        .with_state(state)
}
