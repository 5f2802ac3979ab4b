//! # Catalog Store
//!
//! [`CatalogStore`] owns the three artifacts of a catalog (see
//! [`ArtifactPaths`]) and the [`IdCounter`]. Every operation is a fresh
//! load-mutate-store cycle over the whole file; nothing is cached between calls.
//!
//! ## Two API flavours
//!
//! - `try_*` methods return `Result<_, StoreError>` so the caller can tell a read failure
//!   from a legitimately empty catalog.
//! - The plain methods (`list_all`, `add`, `delete`, ...) absorb failures at the store
//!   boundary: reads degrade to empty, writes degrade to `None`/`false`, and the error is
//!   logged with `warn!`.
//!
//! ## Concurrency
//!
//! There is no locking. Two operations racing on the same files lose updates (last write
//! wins). Callers that share a store must serialize access, which is what
//! [`CatalogActor`](crate::catalog_actor::CatalogActor) does.

use super::artifacts::ArtifactPaths;
use super::counter::IdCounter;
use super::error::StoreError;
use super::json_file;
use crate::model::{Product, ProductFields, ProductId};
use std::path::Path;
use tracing::{debug, info, warn};

const EMPTY_SET: &[u8] = b"[]";

/// File-backed product catalog.
#[derive(Debug)]
pub struct CatalogStore {
    paths: ArtifactPaths,
    counter: IdCounter,
}

impl CatalogStore {
    /// Opens the catalog at `paths`, creating missing artifacts.
    ///
    /// Both record artifacts are created as `[]` independently if absent; existing files
    /// are left untouched. The id counter resumes from the counter artifact, raised past
    /// the highest id already stored in either record artifact. Failures are logged and
    /// never fatal, so opening is idempotent and best-effort.
    pub async fn open(paths: ArtifactPaths) -> Self {
        for path in [&paths.active, &paths.archived] {
            match json_file::create_if_missing(path, EMPTY_SET).await {
                Ok(true) => info!(path = %path.display(), "Created empty artifact"),
                Ok(false) => debug!(path = %path.display(), "Artifact present"),
                Err(e) => warn!(error = %e, "Failed to initialize artifact"),
            }
        }
        let mut counter = IdCounter::load(&paths.last_id).await;
        for path in [&paths.active, &paths.archived] {
            if let Some(highest) = highest_id(path).await {
                if highest >= counter.peek() {
                    warn!(path = %path.display(), %highest, "Id counter behind stored records");
                    counter.raise_past(highest);
                }
            }
        }
        info!(next_id = %counter.peek(), "Catalog opened");
        Self { paths, counter }
    }

    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    /// The id the next created product will receive.
    pub fn next_id(&self) -> ProductId {
        self.counter.peek()
    }

    // --- Reads ---

    /// Reads the active set.
    pub async fn try_list_all(&self) -> Result<Vec<Product>, StoreError> {
        json_file::read_json(&self.paths.active).await
    }

    /// Reads the active set, or an empty vector if the artifact cannot be loaded.
    pub async fn list_all(&self) -> Vec<Product> {
        self.try_list_all().await.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to list products");
            Vec::new()
        })
    }

    /// Finds the active product with `id`.
    pub async fn try_get_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let products = self.try_list_all().await?;
        Ok(products.into_iter().find(|p| p.id == id))
    }

    /// Finds the active product with `id`. A read failure looks like "not found".
    pub async fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.list_all().await.into_iter().find(|p| p.id == id)
    }

    /// Reads the archived set.
    pub async fn try_list_deleted(&self) -> Result<Vec<Product>, StoreError> {
        json_file::read_json(&self.paths.archived).await
    }

    /// Reads the archived set, or an empty vector if the artifact cannot be loaded.
    pub async fn list_deleted(&self) -> Vec<Product> {
        self.try_list_deleted().await.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to list deleted products");
            Vec::new()
        })
    }

    // --- Mutations ---

    /// Creates a product from `fields` with the next id.
    ///
    /// The active set is persisted first, then the counter. The id is consumed as soon
    /// as the active set has been loaded, so a failed write never leads to id reuse. If
    /// the counter write fails after the record is stored, [`CatalogStore::open`] moves
    /// the counter past it on the next start.
    ///
    /// Fails with [`StoreError::IdSpaceExhausted`] once no ids are left.
    pub async fn try_add(&mut self, fields: ProductFields) -> Result<Product, StoreError> {
        let mut products = self.load_for_write().await?;
        let product = Product::new(self.assign_id()?, fields);
        products.push(product.clone());
        json_file::write_pretty(&self.paths.active, &products).await?;
        self.counter.save(&self.paths.last_id).await?;
        info!(id = %product.id, size = products.len(), "Created");
        Ok(product)
    }

    /// Creates a product, returning `None` if it could not be persisted.
    pub async fn add(&mut self, fields: ProductFields) -> Option<Product> {
        self.try_add(fields)
            .await
            .map_err(|e| warn!(error = %e, "Failed to add product"))
            .ok()
    }

    /// Creates one product per entry of `items` in a single write of the active set.
    ///
    /// Ids are sequential and follow input order; the counter is persisted once.
    pub async fn try_add_many(
        &mut self,
        items: Vec<ProductFields>,
    ) -> Result<Vec<Product>, StoreError> {
        let mut products = self.load_for_write().await?;
        let mut created = Vec::with_capacity(items.len());
        for fields in items {
            created.push(Product::new(self.assign_id()?, fields));
        }
        products.extend(created.iter().cloned());
        json_file::write_pretty(&self.paths.active, &products).await?;
        self.counter.save(&self.paths.last_id).await?;
        info!(
            count = created.len(),
            size = products.len(),
            "Created batch"
        );
        Ok(created)
    }

    /// Creates several products, returning an empty vector if they could not be persisted.
    pub async fn add_many(&mut self, items: Vec<ProductFields>) -> Vec<Product> {
        self.try_add_many(items).await.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to add products");
            Vec::new()
        })
    }

    /// Overlays `fields` onto the product with `id`.
    ///
    /// Returns `Ok(false)` without writing anything if no such product exists. An `id`
    /// key in `fields` is ignored.
    pub async fn try_update(&self, id: ProductId, fields: ProductFields) -> Result<bool, StoreError> {
        let mut products = self.load_for_write().await?;
        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            warn!(%id, "Not found");
            return Ok(false);
        };
        product.merge(fields);
        json_file::write_pretty(&self.paths.active, &products).await?;
        info!(%id, "Updated");
        Ok(true)
    }

    /// Updates a product, returning `false` if it is absent or the write fails.
    pub async fn update(&self, id: ProductId, fields: ProductFields) -> bool {
        self.try_update(id, fields).await.unwrap_or_else(|e| {
            warn!(%id, error = %e, "Failed to update product");
            false
        })
    }

    /// Moves the product with `id` from the active set to the archived set.
    ///
    /// Returns `Ok(false)` without touching any artifact if no such product exists.
    /// The archived set is persisted before the active set; the two writes are not
    /// atomic as a pair, so a failure in between leaves the record in both sets.
    pub async fn try_delete(&self, id: ProductId) -> Result<bool, StoreError> {
        let mut products = self.load_for_write().await?;
        let Some(position) = products.iter().position(|p| p.id == id) else {
            warn!(%id, "Not found");
            return Ok(false);
        };

        let mut archived: Vec<Product> =
            json_file::read_json_or_default(&self.paths.archived).await?;
        archived.push(products[position].clone());
        json_file::write_pretty(&self.paths.archived, &archived).await?;

        products.remove(position);
        json_file::write_pretty(&self.paths.active, &products).await?;
        info!(%id, size = products.len(), archived = archived.len(), "Deleted");
        Ok(true)
    }

    /// Deletes a product, returning `false` if it is absent or a write fails.
    pub async fn delete(&self, id: ProductId) -> bool {
        self.try_delete(id).await.unwrap_or_else(|e| {
            warn!(%id, error = %e, "Failed to delete product");
            false
        })
    }

    fn assign_id(&mut self) -> Result<ProductId, StoreError> {
        self.counter
            .assign()
            .ok_or_else(|| StoreError::IdSpaceExhausted {
                path: self.paths.last_id.clone(),
            })
    }

    /// Loads the active set ahead of a mutation.
    ///
    /// A missing file counts as empty, but an unreadable or malformed one aborts the
    /// mutation instead of being overwritten.
    async fn load_for_write(&self) -> Result<Vec<Product>, StoreError> {
        json_file::read_json_or_default(&self.paths.active).await
    }
}

/// Highest id among the records stored at `path`, if it can be read.
async fn highest_id(path: &Path) -> Option<ProductId> {
    match json_file::read_json::<Vec<Product>>(path).await {
        Ok(products) => products.iter().map(|p| p.id).max(),
        Err(e) => {
            debug!(error = %e, "Skipping artifact while checking the id counter");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> ProductFields {
        value.as_object().cloned().unwrap()
    }

    async fn open_in(dir: &tempfile::TempDir) -> CatalogStore {
        CatalogStore::open(ArtifactPaths::new(dir.path(), "products")).await
    }

    #[tokio::test]
    async fn test_open_creates_empty_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_in(&dir).await;

        assert_eq!(std::fs::read_to_string(&store.paths().active).unwrap(), "[]");
        assert_eq!(
            std::fs::read_to_string(&store.paths().archived).unwrap(),
            "[]"
        );
        assert!(!store.paths().last_id.exists());
        assert_eq!(store.next_id(), ProductId(1));
    }

    #[tokio::test]
    async fn test_open_creates_only_the_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::new(dir.path(), "products");
        std::fs::write(&paths.active, r#"[{"id":3,"title":"Kept"}]"#).unwrap();

        let store = CatalogStore::open(paths).await;

        assert_eq!(store.list_all().await.len(), 1);
        assert_eq!(
            std::fs::read_to_string(&store.paths().archived).unwrap(),
            "[]"
        );
    }

    #[tokio::test]
    async fn test_update_missing_id_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_in(&dir).await;
        store.add(fields(json!({"title": "A"}))).await.unwrap();
        let before = std::fs::read_to_string(&store.paths().active).unwrap();

        assert!(!store.update(ProductId(42), fields(json!({"stock": 1}))).await);
        assert_eq!(
            std::fs::read_to_string(&store.paths().active).unwrap(),
            before
        );
    }

    #[tokio::test]
    async fn test_add_refuses_to_clobber_malformed_active_set() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_in(&dir).await;
        std::fs::write(&store.paths().active, "{ broken").unwrap();

        let result = store.try_add(fields(json!({"title": "A"}))).await;
        assert!(matches!(result, Err(StoreError::Parse { .. })));
        assert_eq!(
            std::fs::read_to_string(&store.paths().active).unwrap(),
            "{ broken"
        );
        assert!(store.add(fields(json!({"title": "B"}))).await.is_none());
    }

    #[tokio::test]
    async fn test_read_failure_is_distinguishable() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_in(&dir).await;
        std::fs::write(&store.paths().active, "[{\"title\": \"no id\"}]").unwrap();

        assert!(store.list_all().await.is_empty());
        assert!(store.get_by_id(ProductId(1)).await.is_none());
        let err = store.try_list_all().await.unwrap_err();
        assert!(err.is_read_failure());
        assert_eq!(err.path(), store.paths().active.as_path());
    }

    #[tokio::test]
    async fn test_list_deleted_missing_artifact_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_in(&dir).await;
        std::fs::remove_file(&store.paths().archived).unwrap();

        assert!(store.list_deleted().await.is_empty());
        assert!(matches!(
            store.try_list_deleted().await,
            Err(StoreError::Read { .. })
        ));
    }

    #[tokio::test]
    async fn test_exhausted_id_space_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::new(dir.path(), "products");
        std::fs::write(&paths.last_id, (u64::MAX - 1).to_string()).unwrap();

        let mut store = CatalogStore::open(paths).await;
        assert_eq!(store.next_id(), ProductId(u64::MAX));

        let result = store.try_add(fields(json!({"title": "A"}))).await;
        assert!(matches!(result, Err(StoreError::IdSpaceExhausted { .. })));
        let result = store.try_add_many(vec![fields(json!({"title": "B"}))]).await;
        assert!(matches!(result, Err(StoreError::IdSpaceExhausted { .. })));
        assert!(store.add(fields(json!({"title": "C"}))).await.is_none());

        assert_eq!(std::fs::read_to_string(&store.paths().active).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_counter_at_max_is_ignored_in_favour_of_stored_records() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::new(dir.path(), "products");
        std::fs::write(&paths.active, r#"[{"id":4,"title":"Kept"}]"#).unwrap();
        std::fs::write(&paths.last_id, u64::MAX.to_string()).unwrap();

        let mut store = CatalogStore::open(paths).await;
        assert_eq!(store.next_id(), ProductId(5));
        let created = store.add(fields(json!({"title": "New"}))).await.unwrap();
        assert_eq!(created.id, ProductId(5));
    }
}
