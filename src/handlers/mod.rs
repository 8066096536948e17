//! HTTP handlers for the product resource and service endpoints.

pub mod product;
pub mod system;
pub use product::*;
pub use system::*;

use crate::error::AppError;

/// Fallback for unknown paths and unsupported methods.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
