use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use super::AppState;
use crate::model::{Product, ProductId, ProductList, ProductPayload};
use crate::product_actor::ProductError;

/// A body that is not a JSON object of the right shape is a validation failure, not a
/// framework error page.
fn decode_body(
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<ProductPayload, ProductError> {
    body.map(|Json(payload)| payload)
        .map_err(|rejection| ProductError::ValidationError(rejection.body_text()))
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<ProductList>, ProductError> {
    debug!("GET /products");
    Ok(Json(state.products.list_products().await?))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Product>, ProductError> {
    debug!(id, "GET /products/:id");
    Ok(Json(state.products.get_product(ProductId(id)).await?))
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ProductError> {
    debug!("POST /products");
    let payload = decode_body(body)?;
    let product = state.products.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, ProductError> {
    debug!(id, "PUT /products/:id");
    let payload = decode_body(body)?;
    Ok(Json(
        state.products.update_product(ProductId(id), payload).await?,
    ))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ProductError> {
    debug!(id, "DELETE /products/:id");
    state.products.delete_product(ProductId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
