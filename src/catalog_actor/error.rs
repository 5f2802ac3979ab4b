//! Error types for the catalog actor.

use crate::store::StoreError;
use thiserror::Error;

/// Errors returned by [`CatalogClient`](super::CatalogClient).
#[derive(Debug, Error)]
pub enum ActorError {
    /// The actor task is gone; the request was never delivered.
    #[error("Catalog actor closed")]
    ActorClosed,

    /// The actor dropped the response channel without answering.
    #[error("Catalog actor dropped response channel")]
    ActorDropped,

    /// The store failed to load or persist an artifact.
    #[error(transparent)]
    Store(#[from] StoreError),
}
