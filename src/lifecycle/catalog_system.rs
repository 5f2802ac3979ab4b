use crate::catalog_actor::{CatalogActor, CatalogClient};
use crate::store::CatalogStore;
use tracing::{error, info};

/// The runtime orchestrator for the catalog.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: starting the catalog actor and stopping it cleanly
/// - **Handing out access**: [`CatalogSystem::catalog_client`] is the handle every other
///   component clones
///
/// # Example
///
/// ```ignore
/// let store = CatalogStore::open(ArtifactPaths::new(".", "products")).await;
/// let system = CatalogSystem::new(store, 32);
///
/// let products = system.catalog_client.list_all().await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the catalog actor
    pub catalog_client: CatalogClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Spawns the catalog actor over `store` and returns the running system.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(store: CatalogStore, channel_capacity: usize) -> Self {
        let (actor, catalog_client) = CatalogActor::new(store, channel_capacity);
        let handle = tokio::spawn(actor.run());
        Self {
            catalog_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops this system's client and waits for the actor to drain its queue. Clones of
    /// the client handed out earlier keep the actor alive, so drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        drop(self.catalog_client);

        if let Err(e) = self.handle.await {
            error!("Catalog actor task failed: {:?}", e);
            return Err(format!("Catalog actor task failed: {:?}", e));
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
