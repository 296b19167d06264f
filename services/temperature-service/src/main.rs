mod app;
mod config;
mod cors;
mod handlers;
mod models;
mod state;

use anyhow::Context;
use temperature_common::{bind_listener, init_tracing, shutdown_signal};

use crate::config::ServiceConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guards = init_tracing("temperature-service");

    let config = ServiceConfig::from_env()?;
    tracing::info!(?config, "starting temperature-service");

    let app = app::build_router(AppState::new(config.shape), &config.http);
    let listener = bind_listener(config.bind_addr)
        .await
        .with_context(|| format!("bind {}", config.bind_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve")?;

    Ok(())
}
