use std::sync::Arc;

use anyhow::Context;

use userdir_api::config::ApiConfig;
use userdir_directory::UserDirectory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    userdir_observability::init_with(config.log_format);

    let app = userdir_api::app::build_app(Arc::new(UserDirectory::new()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
