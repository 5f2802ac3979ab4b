//! # Catalog Recipe
//!
//! > **A JSON-file product catalog behind a single-writer actor.**
//!
//! The catalog keeps its products in three JSON files: the products in stock, the
//! products that were deleted (archived, never destroyed), and the last id handed out.
//! Every operation reads the whole file, changes it, and writes it back.
//!
//! ## Architecture Notes
//!
//! ### 1. Whole-file persistence
//! The [`store`] has no cache, no index, and no locking. Two overlapping writes lose one
//! of them, so callers must never touch the store concurrently.
//!
//! ### 2. Single writer
//! The [`catalog_actor`] owns the store inside one Tokio task and runs requests one at a
//! time. Everything else in the program talks to it through a cloneable
//! [`CatalogClient`](catalog_actor::CatalogClient).
//!
//! ### 3. Failures at the boundary
//! Store reads that fail degrade to "empty", writes that fail degrade to `false`/`None`,
//! and both are logged. The `try_*` store methods and the client keep the error instead,
//! which is what lets the HTTP layer answer with an error envelope rather than an empty
//! list.
//!
//! ### 4. Observability
//! `tracing` everywhere with structured fields; see [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`model`] - [`Product`](model::Product) and [`ProductId`](model::ProductId)
//! - [`store`] - [`CatalogStore`](store::CatalogStore), the persistence core
//! - [`catalog_actor`] - the single-writer queue in front of the store
//! - [`lifecycle`] - [`CatalogSystem`](lifecycle::CatalogSystem), seeding, tracing setup
//! - [`http`] - axum routes over the read operations
//! - [`config`] - command-line and environment configuration
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- --seed demo/products.json
//! curl 'http://127.0.0.1:3000/products?limit=2'
//! ```

pub mod catalog_actor;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod store;
