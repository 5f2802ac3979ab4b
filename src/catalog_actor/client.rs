//! # Catalog Client
//!
//! Provides a high-level async API over the [`CatalogActor`](super::CatalogActor).

use super::error::ActorError;
use super::message::{CatalogRequest, Response};
use crate::model::{Product, ProductFields, ProductId};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Cloneable handle for sending requests to the catalog actor.
///
/// Holds only the channel sender, so cloning is cheap. Dropping the last clone shuts the
/// actor down.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> CatalogRequest,
    ) -> Result<T, ActorError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ActorError::ActorClosed)?;
        Ok(response.await.map_err(|_| ActorError::ActorDropped)??)
    }

    /// All products currently in stock, in creation order.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, ActorError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::ListAll { respond_to })
            .await
    }

    /// The active product with `id`, or `None`.
    #[instrument(skip(self))]
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, ActorError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::Get { id, respond_to })
            .await
    }

    /// Creates a product and returns it with its assigned id.
    #[instrument(skip(self, fields))]
    pub async fn add(&self, fields: ProductFields) -> Result<Product, ActorError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::Add { fields, respond_to })
            .await
    }

    /// Creates several products in one write; output order follows input order.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn add_many(&self, items: Vec<ProductFields>) -> Result<Vec<Product>, ActorError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::AddMany { items, respond_to })
            .await
    }

    /// Overlays `fields` onto product `id`. `Ok(false)` means no such product.
    #[instrument(skip(self, fields))]
    pub async fn update(&self, id: ProductId, fields: ProductFields) -> Result<bool, ActorError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::Update {
            id,
            fields,
            respond_to,
        })
        .await
    }

    /// Archives product `id`. `Ok(false)` means no such product.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<bool, ActorError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::Delete { id, respond_to })
            .await
    }

    /// All archived products, in deletion order.
    #[instrument(skip(self))]
    pub async fn list_deleted(&self) -> Result<Vec<Product>, ActorError> {
        debug!("Sending request");
        self.request(|respond_to| CatalogRequest::ListDeleted { respond_to })
            .await
    }
}
