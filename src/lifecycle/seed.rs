//! Bulk-loading products at startup.

use crate::catalog_actor::{ActorError, CatalogClient};
use crate::model::{Product, ProductFields};
use crate::store::json_file;
use std::path::Path;
use tracing::{info, instrument};

/// Adds every product described in the JSON array at `path` with one `add_many` call.
///
/// The file holds product fields only; ids are assigned by the catalog and any `id`
/// key in the file is ignored.
#[instrument(name = "seed", skip(client), fields(path = %path.display()))]
pub async fn seed_from_file(
    client: &CatalogClient,
    path: &Path,
) -> Result<Vec<Product>, ActorError> {
    let items: Vec<ProductFields> = json_file::read_json(path).await?;
    let created = client.add_many(items).await?;
    info!(count = created.len(), "Seeded catalog");
    Ok(created)
}
