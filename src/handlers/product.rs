//! Product CRUD handlers: list, read, create, update, delete, delete all.

use crate::error::AppError;
use crate::model::ProductInput;
use crate::response::{success_created, success_ok, Envelope};
use crate::service::ProductValidator;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Ids that are not integers (or not even UTF-8) can never match a row, so they read as
/// "not found".
fn path_id(path: Result<Path<String>, PathRejection>) -> Result<i64, AppError> {
    let Path(id_str) = path.map_err(|_| AppError::product_not_found())?;
    parse_id(&id_str)
}

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::product_not_found())
}

fn body(payload: Result<Json<ProductInput>, JsonRejection>) -> Result<ProductInput, AppError> {
    payload
        .map(|Json(input)| input)
        .map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(rejection.body_text())
            } else {
                AppError::BadRequest(rejection.body_text())
            }
        })
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = state
        .store
        .list_all()
        .await
        .map_err(AppError::store("Failed to fetch products"))?;
    let count = products.len() as i64;
    Ok(success_ok(Envelope::ok_with_count(products, count)))
}

pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let product = state
        .store
        .get_by_id(id)
        .await
        .map_err(AppError::store("Failed to fetch product"))?
        .ok_or_else(AppError::product_not_found)?;
    Ok(success_ok(Envelope::ok(product)))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let input = body(payload)?;
    let new_product = ProductValidator::validate(&input)?;
    let product = state
        .store
        .create(&new_product)
        .await
        .map_err(AppError::store("Failed to create product"))?;
    tracing::info!(id = product.id, "product created");
    Ok(success_created(Envelope::ok_with_message(
        product,
        "Product created successfully",
    )))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    state
        .store
        .get_by_id(id)
        .await
        .map_err(AppError::store("Failed to update product"))?
        .ok_or_else(AppError::product_not_found)?;
    let input = body(payload)?;
    let new_product = ProductValidator::validate(&input)?;
    // The row can vanish between the existence check and the write.
    let product = state
        .store
        .update(id, &new_product)
        .await
        .map_err(AppError::store("Failed to update product"))?
        .ok_or_else(AppError::product_not_found)?;
    tracing::info!(id, "product updated");
    Ok(success_ok(Envelope::ok_with_message(
        product,
        "Product updated successfully",
    )))
}

pub async fn delete_one(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let product = state
        .store
        .delete_one(id)
        .await
        .map_err(AppError::store("Failed to delete product"))?
        .ok_or_else(AppError::product_not_found)?;
    tracing::info!(id, "product deleted");
    Ok(success_ok(Envelope::ok_with_message(
        product,
        "Product deleted successfully",
    )))
}

pub async fn delete_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let count = state
        .store
        .delete_all()
        .await
        .map_err(AppError::store("Failed to delete all products"))?;
    tracing::info!(count, "all products deleted, id sequence reset");
    Ok(success_ok(Envelope::message(format!(
        "All {} products deleted successfully",
        count
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("7").unwrap(), 7);
        assert_eq!(parse_id(" 12 ").unwrap(), 12);
        assert!(matches!(parse_id("abc"), Err(AppError::NotFound(_))));
        assert!(matches!(parse_id("1.5"), Err(AppError::NotFound(_))));
    }
}
