use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Extension, Path},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use catalog_products::{Product, ProductId, ProductStore};

use crate::app::errors::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/:id", get(get_product))
        .route("/:id/details", post(update_product_details))
}

/// `GET /products/:id`
///
/// A malformed id is reported as not found rather than as a bad request; only
/// the update route treats it as a client error. That includes segments the
/// path extractor itself rejects, such as percent-encoded invalid UTF-8.
pub async fn get_product(
    Extension(store): Extension<Arc<ProductStore>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(raw) = path.map_err(|e| {
        tracing::debug!(error = %e, "rejecting product lookup path");
        ApiError::NotFound
    })?;
    let id: ProductId = raw.parse().map_err(|e| {
        tracing::debug!(error = %e, "rejecting product lookup");
        ApiError::NotFound
    })?;

    store.get(id).map(Json).ok_or(ApiError::NotFound)
}

/// `POST /products/:id/details`
///
/// Replaces the whole record at `id`, which must already exist. The body is
/// decoded by hand so every decode failure maps to 400 regardless of
/// content type.
pub async fn update_product_details(
    Extension(store): Extension<Arc<ProductStore>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let id: ProductId = id.parse().inspect_err(|e| {
        tracing::debug!(error = %e, "rejecting product update");
    })?;

    let product: Product = serde_json::from_slice(&body).inspect_err(|e| {
        tracing::debug!(product_id = %id, error = %e, "rejecting product details");
    })?;

    if !store.exists(id) {
        return Err(ApiError::NotFound);
    }

    store.update(id, product);
    Ok(StatusCode::NO_CONTENT)
}
