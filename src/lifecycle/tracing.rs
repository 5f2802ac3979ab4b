//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! ## Configuration
//!
//! Verbosity comes from `RUST_LOG`; when it is unset the default is `info`. The format is
//! compact and hides the module prefix (`with_target(false)`), since log lines already
//! carry structured fields such as `id`, `size`, and `path`.
//!
//! ## What Gets Traced
//!
//! - **Store**: artifact creation, counter loading, every mutation (`Created`, `Updated`,
//!   `Deleted`) and every absorbed failure at `warn`
//! - **Actor**: startup, each request at `debug`, shutdown with the last id used
//! - **Client**: one span per call (`list_all`, `get`, ...) via `#[instrument]`
//! - **HTTP**: each request and the error envelope when a read fails
//!
//! ```bash
//! RUST_LOG=info cargo run     # mutations and lifecycle
//! RUST_LOG=debug cargo run    # plus every request and payload
//! ```
//!
//! With `RUST_LOG=debug` a seeded start looks like:
//!
//! ```text
//! INFO Created empty artifact path="./products_stockActual.json"
//! INFO Catalog opened next_id=product_1
//! INFO Catalog actor started next_id=product_1
//! DEBUG seed:add_many{count=4}: Sending request
//! DEBUG AddMany count=4
//! INFO Created batch count=4 size=4
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for the binary.
///
/// Calling it twice is harmless: the second call leaves the first subscriber in place.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Log lines carry structured fields instead of module paths
        .compact()
        .try_init();
}
