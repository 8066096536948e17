//! Service endpoints: advisory next id and health.

use crate::error::AppError;
use crate::response::{success_ok, Envelope, HealthBody, NextId};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;

/// Preview of the next id. Not reserved; a concurrent create can take it first.
pub async fn next_id(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let next_id = state
        .store
        .next_id()
        .await
        .map_err(AppError::store("Failed to get next ID"))?;
    Ok(success_ok(Envelope::ok(NextId { next_id })))
}

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthBody>, AppError> {
    let products_count = state
        .store
        .count()
        .await
        .map_err(AppError::store("Database connection failed"))?;
    Ok(Json(HealthBody {
        success: true,
        message: "API running".into(),
        timestamp: Utc::now(),
        products_count,
    }))
}
