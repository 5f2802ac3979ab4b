//! Pure data structures persisted by the [`CatalogStore`](crate::store::CatalogStore).

pub mod product;

pub use product::*;
