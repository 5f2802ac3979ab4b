//! # Catalog Actor
//!
//! The server half of the catalog: one Tokio task that owns the
//! [`CatalogStore`] and processes requests strictly one at a time.

use super::client::CatalogClient;
use super::message::CatalogRequest;
use crate::store::CatalogStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns a [`CatalogStore`] and serializes every operation on it.
///
/// # Concurrency Model
/// The store does whole-file read-modify-write cycles without locking, so two operations
/// running at once would lose updates. The actor receives requests over an mpsc channel
/// and runs each to completion before taking the next, which turns any number of
/// concurrent [`CatalogClient`] callers into a single writer.
///
/// # Usage Pattern
///
/// ```rust,no_run
/// use catalog_recipe::catalog_actor::CatalogActor;
/// use catalog_recipe::store::{ArtifactPaths, CatalogStore};
///
/// #[tokio::main]
/// async fn main() {
///     let store = CatalogStore::open(ArtifactPaths::new(".", "products")).await;
///     let (actor, client) = CatalogActor::new(store, 32);
///     tokio::spawn(actor.run());
///
///     let products = client.list_all().await.unwrap_or_default();
///     println!("{} products", products.len());
/// }
/// ```
pub struct CatalogActor {
    receiver: mpsc::Receiver<CatalogRequest>,
    store: CatalogStore,
}

impl CatalogActor {
    /// Creates a new `CatalogActor` and its associated `CatalogClient`.
    ///
    /// # Arguments
    ///
    /// * `store` - The opened catalog this actor will own.
    /// * `buffer_size` - The capacity of the MPSC channel, at least 1. If the channel is
    ///   full, calls to the client wait until there is space.
    pub fn new(store: CatalogStore, buffer_size: usize) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self { receiver, store };
        (actor, CatalogClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!(next_id = %self.store.next_id(), "Catalog actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::ListAll { respond_to } => {
                    let result = self.store.try_list_all().await;
                    match &result {
                        Ok(products) => debug!(size = products.len(), "ListAll"),
                        Err(e) => warn!(error = %e, "ListAll failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::Get { id, respond_to } => {
                    let result = self.store.try_get_by_id(id).await;
                    match &result {
                        Ok(found) => debug!(%id, found = found.is_some(), "Get"),
                        Err(e) => warn!(%id, error = %e, "Get failed"),
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::Add { fields, respond_to } => {
                    debug!(?fields, "Add");
                    let result = self.store.try_add(fields).await;
                    if let Err(e) = &result {
                        warn!(error = %e, "Add failed");
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::AddMany { items, respond_to } => {
                    debug!(count = items.len(), "AddMany");
                    let result = self.store.try_add_many(items).await;
                    if let Err(e) = &result {
                        warn!(error = %e, "AddMany failed");
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::Update {
                    id,
                    fields,
                    respond_to,
                } => {
                    debug!(%id, ?fields, "Update");
                    let result = self.store.try_update(id, fields).await;
                    if let Err(e) = &result {
                        warn!(%id, error = %e, "Update failed");
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::Delete { id, respond_to } => {
                    debug!(%id, "Delete");
                    let result = self.store.try_delete(id).await;
                    if let Err(e) = &result {
                        warn!(%id, error = %e, "Delete failed");
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::ListDeleted { respond_to } => {
                    let result = self.store.try_list_deleted().await;
                    match &result {
                        Ok(products) => debug!(size = products.len(), "ListDeleted"),
                        Err(e) => warn!(error = %e, "ListDeleted failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(last_id = self.store.next_id().0 - 1, "Catalog actor shutdown");
    }
}
