use std::sync::Arc;

use anyhow::Context;
use catalog_products::ProductStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    // Seeding happens before the store is shared with any handler.
    let store = Arc::new(ProductStore::seeded());
    tracing::info!(products = store.len(), "product store ready");

    let app = catalog_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(catalog_api::DEFAULT_ADDR)
        .await
        .with_context(|| format!("failed to bind {}", catalog_api::DEFAULT_ADDR))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c; shutdown signal disabled");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
