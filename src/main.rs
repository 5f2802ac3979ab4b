//! # Catalog Server
//!
//! Opens the catalog named by the [`Config`], optionally seeds it, and serves it over
//! HTTP until `ctrl+c` (or, with `--shutdown-after-first`, until the first listing has
//! been answered).

use catalog_recipe::config::Config;
use catalog_recipe::http;
use catalog_recipe::lifecycle::{seed_from_file, setup_tracing, CatalogSystem};
use catalog_recipe::store::CatalogStore;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    setup_tracing();

    info!(?config, "Starting catalog server");

    let store = CatalogStore::open(config.artifact_paths()).await;
    let system = CatalogSystem::new(store, config.channel_capacity.get());

    if let Some(seed) = &config.seed {
        if let Err(e) = seed_from_file(&system.catalog_client, seed).await {
            error!(error = %e, "Seeding failed");
        }
    }

    let listener = TcpListener::bind(config.bind).await?;
    info!(addr = %listener.local_addr()?, "Catalog server listening");

    http::serve(
        listener,
        system.catalog_client.clone(),
        config.shutdown_after_first,
        shutdown_signal(),
    )
    .await?;

    system.shutdown().await?;
    info!("Catalog server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for ctrl+c");
        std::future::pending::<()>().await;
    }
    info!("Received ctrl+c");
}
