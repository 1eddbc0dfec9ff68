use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::store::Inventory;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<RwLock<Inventory>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,inventory_api=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        inventory: Arc::new(RwLock::new(Inventory::seeded())),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Inventory API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/inventory",
            get(handlers::inventory::get_inventory).post(handlers::inventory::create_item),
        )
        .route(
            "/inventory/:uid",
            delete(handlers::inventory::delete_item).put(handlers::inventory::update_item),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
