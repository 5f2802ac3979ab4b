//! HTTP transport for the catalog, built on axum.
//!
//! ## Routes
//!
//! - `GET /products[?limit=N]` - every active product, or the first `N`. A `limit` that is
//!   not a non-negative integer is ignored.
//! - `GET /products/:pid` - one product; `404 {"error": "Product not found"}` when the id
//!   is absent or not a number.
//!
//! A store failure never becomes a server error: the handler answers `200` with an
//! `{"error": ...}` envelope instead.
//!
//! ## Shutdown after first listing
//!
//! With `shutdown_after_first` set, the server stops gracefully once it has answered the
//! first `GET /products` (successfully or not) or a by-id lookup that failed.

use std::future::Future;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::{debug, error, info};

use crate::catalog_actor::CatalogClient;
use crate::model::ProductId;

const LIST_ERROR: &str = "Error fetching products";
const BY_ID_ERROR: &str = "Error fetching product by id";
const NOT_FOUND: &str = "Product not found";

/// One-shot signal that the server should stop after its first answered listing.
#[derive(Clone, Default)]
pub struct ShutdownAfterFirst(Arc<Notify>);

impl ShutdownAfterFirst {
    pub fn new() -> Self {
        Self::default()
    }

    fn trigger(&self) {
        self.0.notify_one();
    }

    /// Resolves once a handler has triggered the signal, even if that happened earlier.
    pub async fn wait(&self) {
        self.0.notified().await;
    }
}

#[derive(Clone)]
struct AppState {
    client: CatalogClient,
    shutdown: Option<ShutdownAfterFirst>,
}

impl AppState {
    fn request_finished(&self) {
        if let Some(shutdown) = &self.shutdown {
            shutdown.trigger();
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListParams {
    limit: Option<String>,
}

/// Build an axum `Router` serving the catalog through `client`.
pub fn router(client: CatalogClient, shutdown: Option<ShutdownAfterFirst>) -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:pid", get(get_product))
        .with_state(AppState { client, shutdown })
}

/// Serve the catalog on `listener` until `signal` resolves.
///
/// With `shutdown_after_first` set, the server also stops after its first answered
/// listing. In-flight responses are completed before this returns.
pub async fn serve(
    listener: TcpListener,
    client: CatalogClient,
    shutdown_after_first: bool,
    signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let trigger = shutdown_after_first.then(ShutdownAfterFirst::new);
    let app = router(client, trigger.clone());

    let stop = async move {
        match trigger {
            Some(trigger) => {
                tokio::select! {
                    _ = signal => {}
                    _ = trigger.wait() => info!("Closing the server after the first listing"),
                }
            }
            None => signal.await,
        }
    };

    axum::serve(listener, app).with_graceful_shutdown(stop).await
}

/// `GET /products` - all active products, optionally truncated to `limit`.
async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    debug!(limit = ?params.limit, "GET /products");
    let response = match state.client.list_all().await {
        Ok(mut products) => {
            if let Some(limit) = params.limit.as_deref().and_then(parse_limit) {
                products.truncate(limit);
            }
            Json(products).into_response()
        }
        Err(e) => {
            error!(error = %e, "Error fetching products");
            error_body(StatusCode::OK, LIST_ERROR)
        }
    };
    state.request_finished();
    response
}

/// `GET /products/:pid` - one active product.
async fn get_product(State(state): State<AppState>, Path(pid): Path<String>) -> Response {
    debug!(%pid, "GET /products/:pid");
    let Ok(id) = pid.parse::<u64>().map(ProductId) else {
        return error_body(StatusCode::NOT_FOUND, NOT_FOUND);
    };
    match state.client.get(id).await {
        Ok(Some(product)) => Json(product).into_response(),
        Ok(None) => error_body(StatusCode::NOT_FOUND, NOT_FOUND),
        Err(e) => {
            error!(%id, error = %e, "Error fetching product by id");
            let response = error_body(StatusCode::OK, BY_ID_ERROR);
            state.request_finished();
            response
        }
    }
}

fn parse_limit(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
