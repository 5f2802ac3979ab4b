//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the catalog: starting the actor, loading
//! seed data, and shutting down without losing queued requests.
//!
//! ## The CatalogSystem Pattern
//!
//! ```rust,ignore
//! impl CatalogSystem {
//!     pub fn new(store: CatalogStore, channel_capacity: usize) -> Self {
//!         let (actor, catalog_client) = CatalogActor::new(store, channel_capacity);
//!         let handle = tokio::spawn(actor.run());
//!         Self { catalog_client, handle }
//!     }
//!
//!     pub async fn shutdown(self) -> Result<(), String> {
//!         drop(self.catalog_client);
//!         self.handle.await.map_err(|e| e.to_string())
//!     }
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - the HTTP server releases its clone when it stops serving,
//!    then `shutdown` drops the system's own
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once the queue is empty
//! 3. **Await completion** - the actor task finishes and logs its last id
//!
//! Requests already queued are still executed, so no accepted write is lost.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging; see the [`tracing`](self::tracing) module.

pub mod catalog_system;
pub mod seed;
pub mod tracing;

pub use self::catalog_system::*;
pub use self::seed::*;
pub use self::tracing::*;
