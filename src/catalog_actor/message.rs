//! # Catalog Messages
//!
//! The message types exchanged between [`CatalogClient`](super::CatalogClient) and
//! [`CatalogActor`](super::CatalogActor).

use crate::model::{Product, ProductFields, ProductId};
use crate::store::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to the catalog actor.
///
/// Each variant maps 1:1 to a [`CatalogStore`](crate::store::CatalogStore) operation and
/// carries the channel the actor answers on. Responses hold the store's fallible result,
/// so the caller decides whether to absorb a failure or report it.
#[derive(Debug)]
pub enum CatalogRequest {
    ListAll {
        respond_to: Response<Vec<Product>>,
    },
    Get {
        id: ProductId,
        respond_to: Response<Option<Product>>,
    },
    Add {
        fields: ProductFields,
        respond_to: Response<Product>,
    },
    AddMany {
        items: Vec<ProductFields>,
        respond_to: Response<Vec<Product>>,
    },
    Update {
        id: ProductId,
        fields: ProductFields,
        respond_to: Response<bool>,
    },
    Delete {
        id: ProductId,
        respond_to: Response<bool>,
    },
    ListDeleted {
        respond_to: Response<Vec<Product>>,
    },
}
