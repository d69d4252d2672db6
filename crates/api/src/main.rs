use std::sync::Arc;

use anyhow::Context;

use dixm_api::app::{self, services::AppServices};
use dixm_api::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("failed to load configuration")?;
    dixm_observability::init(config.log_format);

    let services = Arc::new(AppServices::in_memory(config.catalog_policy()));
    if config.seed_on_startup {
        app::services::seed_all_best_effort(services.clone()).await;
    }

    let app = app::build_app(services);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        strict_collections = config.strict_collections,
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
