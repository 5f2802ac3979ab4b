//! # Catalog Actor
//!
//! This module puts the [`CatalogStore`](crate::store::CatalogStore) behind a single-writer
//! queue.
//!
//! ## Overview
//!
//! The store does unlocked whole-file read-modify-write cycles. Any two operations that
//! overlap on the same files lose updates. The actor owns the store in its own task and
//! processes requests sequentially, so every caller holding a [`CatalogClient`] gets
//! consistent results without the store needing any locking of its own.
//!
//! ## Structure
//!
//! - [`actor`] - [`CatalogActor`], the message loop that owns the store
//! - [`client`] - [`CatalogClient`], the cloneable async API
//! - [`message`] - [`CatalogRequest`] and the [`Response`] channel type
//! - [`error`] - [`ActorError`]
//! - [`mock`] - helpers for testing code that talks to a client
//!
//! ## Usage
//!
//! ```rust
//! use catalog_recipe::catalog_actor;
//! use catalog_recipe::store::{ArtifactPaths, CatalogStore};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dir = std::env::temp_dir().join(format!("catalog-doc-{}", std::process::id()));
//!     std::fs::create_dir_all(&dir)?;
//!     let store = CatalogStore::open(ArtifactPaths::new(&dir, "doc")).await;
//!
//!     let (actor, client) = catalog_actor::new(store);
//!     let handle = tokio::spawn(actor.run());
//!
//!     let fields = json!({"title": "Widget", "stock": 5}).as_object().cloned().unwrap();
//!     let product = client.add(fields).await?;
//!     assert!(client.get(product.id).await?.is_some());
//!
//!     drop(client);
//!     handle.await?;
//!     std::fs::remove_dir_all(&dir)?;
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::CatalogActor;
pub use client::CatalogClient;
pub use error::ActorError;
pub use message::{CatalogRequest, Response};

use crate::store::CatalogStore;

/// Default capacity of the request channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Creates a new catalog actor and its client with the default channel capacity.
pub fn new(store: CatalogStore) -> (CatalogActor, CatalogClient) {
    CatalogActor::new(store, DEFAULT_CHANNEL_CAPACITY)
}
