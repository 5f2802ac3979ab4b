use catalog_recipe::catalog_actor::{self, ActorError};
use catalog_recipe::lifecycle::{seed_from_file, CatalogSystem};
use catalog_recipe::model::{ProductFields, ProductId};
use catalog_recipe::store::{ArtifactPaths, CatalogStore, StoreError};
use serde_json::json;
use std::collections::HashSet;

fn fields(value: serde_json::Value) -> ProductFields {
    value.as_object().cloned().expect("fields must be a JSON object")
}

async fn open(dir: &tempfile::TempDir) -> CatalogStore {
    CatalogStore::open(ArtifactPaths::new(dir.path(), "products")).await
}

/// Full lifecycle through the actor: add, update, delete, list archived.
#[tokio::test]
async fn test_catalog_system_full_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let system = CatalogSystem::new(open(&dir).await, 8);
    let client = &system.catalog_client;

    let created = client
        .add(fields(json!({"title": "Super Widget", "price": 25.5, "stock": 100})))
        .await
        .expect("Failed to add product");
    assert_eq!(created.id, ProductId(1));

    assert!(client
        .update(created.id, fields(json!({"stock": 95})))
        .await
        .unwrap());
    let fetched = client
        .get(created.id)
        .await
        .expect("Failed to get product")
        .expect("Product not found");
    assert_eq!(fetched.fields["stock"], json!(95));

    assert!(!client
        .update(ProductId(42), fields(json!({"stock": 1})))
        .await
        .unwrap());

    assert!(client.delete(created.id).await.unwrap());
    assert!(client.get(created.id).await.unwrap().is_none());
    assert!(client.list_all().await.unwrap().is_empty());

    let deleted = client.list_deleted().await.unwrap();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].id, created.id);
    assert_eq!(deleted[0].fields["stock"], json!(95));

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Concurrent callers are serialized: no lost updates, no duplicate ids.
#[tokio::test]
async fn test_concurrent_adds_are_not_lost() {
    let dir = tempfile::tempdir().unwrap();
    let system = CatalogSystem::new(open(&dir).await, 4);

    let mut handles = vec![];
    for i in 0..20 {
        let client = system.catalog_client.clone();
        handles.push(tokio::spawn(async move {
            client.add(fields(json!({ "title": format!("Item {i}") }))).await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let product = handle.await.unwrap().expect("add failed");
        assert!(ids.insert(product.id), "duplicate id {}", product.id);
    }

    let expected: HashSet<ProductId> = (1..=20).map(ProductId).collect();
    assert_eq!(ids, expected);
    assert_eq!(system.catalog_client.list_all().await.unwrap().len(), 20);

    system.shutdown().await.unwrap();
}

/// Queued requests still run when the system shuts down.
#[tokio::test]
async fn test_shutdown_drains_queued_requests() {
    let dir = tempfile::tempdir().unwrap();
    let system = CatalogSystem::new(open(&dir).await, 16);

    let client = system.catalog_client.clone();
    let pending = tokio::spawn(async move {
        let result = client.add(fields(json!({"title": "late"}))).await;
        drop(client);
        result
    });

    system.shutdown().await.unwrap();
    let created = pending.await.unwrap().expect("queued add was lost");

    let reopened = open(&dir).await;
    assert_eq!(
        reopened.get_by_id(created.id).await.map(|p| p.id),
        Some(created.id)
    );
}

#[tokio::test]
async fn test_read_failure_reaches_client_as_store_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir).await;
    std::fs::write(&store.paths().active, "not json").unwrap();

    let (actor, client) = catalog_actor::new(store);
    let handle = tokio::spawn(actor.run());

    match client.list_all().await {
        Err(ActorError::Store(e @ StoreError::Parse { .. })) => assert!(e.is_read_failure()),
        other => panic!("Expected parse failure, got {other:?}"),
    }
    assert!(matches!(
        client.get(ProductId(1)).await,
        Err(ActorError::Store(StoreError::Parse { .. }))
    ));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_seed_demo_file() {
    let dir = tempfile::tempdir().unwrap();
    let system = CatalogSystem::new(open(&dir).await, 8);
    let seed = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demo/products.json");

    let created = seed_from_file(&system.catalog_client, &seed)
        .await
        .expect("Failed to seed");

    let codes: Vec<_> = created.iter().map(|p| p.fields["code"].clone()).collect();
    assert_eq!(codes, vec!["XYZ789", "DEF459", "DEG456", "DEG4321"]);
    let ids: Vec<_> = created.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_exhausted_ids_do_not_stop_the_actor() {
    let dir = tempfile::tempdir().unwrap();
    let paths = ArtifactPaths::new(dir.path(), "products");
    std::fs::write(&paths.last_id, (u64::MAX - 1).to_string()).unwrap();
    let system = CatalogSystem::new(CatalogStore::open(paths).await, 8);
    let client = &system.catalog_client;

    assert!(matches!(
        client.add(fields(json!({"title": "A"}))).await,
        Err(ActorError::Store(StoreError::IdSpaceExhausted { .. }))
    ));
    assert!(matches!(
        client.add_many(vec![fields(json!({"title": "B"}))]).await,
        Err(ActorError::Store(StoreError::IdSpaceExhausted { .. }))
    ));
    assert!(client.list_all().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}
