use std::{path::Path, sync::Arc};

use ahara_core::domain::food::{ports::FoodCatalogService, value_objects::NewFoodRecord};
use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    application::http::server::{
        app_state::AppState,
        http_server::{router, state},
    },
    args::{Args, LogArgs},
};

mod application;
mod args;

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn seed_catalog(state: &AppState, path: &Path) -> Result<(), anyhow::Error> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let foods: Vec<NewFoodRecord> =
        serde_json::from_str(&raw).context("seed file is not a list of foods")?;

    let inserted = state.service.seed_catalog(foods).await?;
    info!(inserted, path = %path.display(), "Seed file processed");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    if args.llm.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is empty; AI analyses will use the fallback");
    }

    let state = state(args.clone()).await?;

    if let Some(seed_file) = &args.seed_file {
        seed_catalog(&state, seed_file).await?;
    }

    let app = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
