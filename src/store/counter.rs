//! Monotonic id assignment for one catalog.
//!
//! The counter holds the *next* id to hand out. The counter artifact stores the *last*
//! id handed out, so an absent artifact and an artifact holding `0` both mean "start at 1".
//! `u64::MAX` is never handed out; once the counter reaches it the id space is exhausted.

use super::error::StoreError;
use super::json_file;
use crate::model::ProductId;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// The next id to assign. Never decreases and is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCounter {
    next: u64,
}

impl Default for IdCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdCounter {
    /// Starts a counter right after `last_used`.
    pub fn after(last_used: u64) -> Self {
        Self {
            next: last_used.saturating_add(1),
        }
    }

    /// Loads the counter from its artifact.
    ///
    /// Only an integer in `1..u64::MAX` is trusted; anything else (missing file, unreadable
    /// file, malformed JSON, non-integer, `u64::MAX`) starts the counter at 1.
    pub async fn load(path: &Path) -> Self {
        match json_file::read_json::<Value>(path).await {
            Ok(value) => match value.as_u64() {
                Some(last_used) if last_used > 0 && last_used < u64::MAX => {
                    debug!(path = %path.display(), last_used, "Loaded id counter");
                    Self::after(last_used)
                }
                _ => {
                    warn!(path = %path.display(), %value, "Ignoring invalid id counter");
                    Self::default()
                }
            },
            Err(StoreError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!(path = %path.display(), "No id counter yet, starting at 1");
                Self::default()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load id counter, starting at 1");
                Self::default()
            }
        }
    }

    /// The id the next call to [`IdCounter::assign`] will return.
    pub fn peek(&self) -> ProductId {
        ProductId(self.next)
    }

    /// Moves the counter past `id` if it is not already.
    pub fn raise_past(&mut self, id: ProductId) {
        self.next = self.next.max(id.0.saturating_add(1));
    }

    /// Hands out the next id and advances the counter, or `None` once the id space is
    /// exhausted.
    pub fn assign(&mut self) -> Option<ProductId> {
        if self.next == u64::MAX {
            return None;
        }
        let id = ProductId(self.next);
        self.next += 1;
        Some(id)
    }

    /// The last id handed out, `0` if none.
    pub fn last_used(&self) -> u64 {
        self.next - 1
    }

    /// Persists [`IdCounter::last_used`] in compact form.
    pub async fn save(&self, path: &Path) -> Result<(), StoreError> {
        json_file::write_compact(path, &self.last_used()).await
    }
}
