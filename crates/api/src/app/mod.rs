//! HTTP application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: error type and consistent JSON error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use catalog_products::ProductStore;

pub mod errors;
pub mod routes;

/// Build the full HTTP router around an already seeded store.
pub fn build_app(store: Arc<ProductStore>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(store)))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
