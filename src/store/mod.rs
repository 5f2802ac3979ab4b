//! JSON-file persistence for the product catalog.
//!
//! ## Structure
//!
//! - [`catalog`] - [`CatalogStore`], the list/get/add/update/delete/archive operations
//! - [`counter`] - [`IdCounter`], monotonic id assignment persisted as the last id used
//! - [`artifacts`] - [`ArtifactPaths`], the three files that make up one catalog
//! - [`error`] - [`StoreError`]
//! - `json_file` - whole-file JSON read/write helpers

pub mod artifacts;
pub mod catalog;
pub mod counter;
pub mod error;
pub(crate) mod json_file;

pub use artifacts::ArtifactPaths;
pub use catalog::CatalogStore;
pub use counter::IdCounter;
pub use error::StoreError;
