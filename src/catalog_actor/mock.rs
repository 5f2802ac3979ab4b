//! # Mocking Utilities
//!
//! Test code that sits *around* the catalog (HTTP handlers, seeding) rarely needs real
//! files. [`create_mock_client`] returns a [`CatalogClient`] wired to a channel the test
//! owns, and the `expect_*` helpers pop the next request so the test can assert on it and
//! answer with any result, including store failures that are awkward to provoke on disk.
//!
//! ```rust
//! use catalog_recipe::catalog_actor::mock::{create_mock_client, expect_list_all};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client(10);
//!     let task = tokio::spawn(async move { client.list_all().await });
//!
//!     let responder = expect_list_all(&mut receiver).await.expect("Expected ListAll");
//!     responder.send(Ok(Vec::new())).unwrap();
//!
//!     assert!(task.await.unwrap().unwrap().is_empty());
//! }
//! ```

use super::client::CatalogClient;
use super::message::{CatalogRequest, Response};
use crate::model::{Product, ProductFields, ProductId};
use tokio::sync::mpsc;

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client(buffer_size: usize) -> (CatalogClient, mpsc::Receiver<CatalogRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender), receiver)
}

/// Helper to verify that the next message is a ListAll request
pub async fn expect_list_all(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<Response<Vec<Product>>> {
    match receiver.recv().await {
        Some(CatalogRequest::ListAll { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(ProductId, Response<Option<Product>>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(ProductFields, Response<Product>)> {
    match receiver.recv().await {
        Some(CatalogRequest::Add { fields, respond_to }) => Some((fields, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an AddMany request
pub async fn expect_add_many(
    receiver: &mut mpsc::Receiver<CatalogRequest>,
) -> Option<(Vec<ProductFields>, Response<Vec<Product>>)> {
    match receiver.recv().await {
        Some(CatalogRequest::AddMany { items, respond_to }) => Some((items, respond_to)),
        _ => None,
    }
}
