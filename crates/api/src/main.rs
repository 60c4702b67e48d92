use std::sync::Arc;

use anyhow::Context;

use partdash_api::config::ApiConfig;
use partdash_inventory::standard_catalog;
use partdash_views::PartViewBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    partdash_observability::init();

    let config = ApiConfig::from_env()?;

    let catalog = standard_catalog().context("failed to load part catalog")?;
    tracing::info!(parts = catalog.len(), "part catalog ready");

    let app = partdash_api::app::build_app(PartViewBuilder::new(Arc::new(catalog)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
