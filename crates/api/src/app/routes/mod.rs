use axum::Router;

pub mod products;
pub mod system;

/// Router for the product endpoints. Expects an `Extension<Arc<ProductStore>>` layer.
pub fn router() -> Router {
    Router::new().nest("/products", products::router())
}
