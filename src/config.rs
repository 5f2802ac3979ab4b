//! Command-line and environment configuration for the catalog server.

use crate::store::ArtifactPaths;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Serve a JSON-file-backed product catalog over HTTP.
#[derive(Debug, clap::Parser, Clone)]
#[clap(name = "catalog-server", version)]
pub struct Config {
    /// Directory holding the catalog artifacts.
    #[clap(long = "data-dir", env = "CATALOG_DATA_DIR", default_value = ".", action)]
    pub data_dir: PathBuf,

    /// Base name shared by the three artifacts, e.g. `products` for
    /// `products_stockActual.json`, `products_productosBorrados.json` and
    /// `products_lastId.json`.
    #[clap(
        long = "base-name",
        env = "CATALOG_BASE_NAME",
        default_value = "products",
        action
    )]
    pub base_name: String,

    /// Address the HTTP server listens on.
    #[clap(
        long = "bind",
        env = "CATALOG_BIND",
        default_value = "127.0.0.1:3000",
        action
    )]
    pub bind: SocketAddr,

    /// Stop the server after answering the first product listing.
    #[clap(
        long = "shutdown-after-first",
        env = "CATALOG_SHUTDOWN_AFTER_FIRST",
        default_value = "false",
        action
    )]
    pub shutdown_after_first: bool,

    /// JSON array of product field objects to add at startup.
    #[clap(long = "seed", env = "CATALOG_SEED", action)]
    pub seed: Option<PathBuf>,

    /// Capacity of the request queue in front of the catalog. Must be at least 1.
    #[clap(
        long = "channel-capacity",
        env = "CATALOG_CHANNEL_CAPACITY",
        default_value = "32",
        action
    )]
    pub channel_capacity: NonZeroUsize,
}

impl Config {
    /// Paths of the catalog artifacts this configuration points at.
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(&self.data_dir, &self.base_name)
    }
}
