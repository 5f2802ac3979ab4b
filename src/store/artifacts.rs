//! On-disk layout of a catalog.
//!
//! A catalog is three JSON files that share a base name:
//!
//! | Artifact | File | Default |
//! |---|---|---|
//! | active | `{base}_stockActual.json` | `[]` |
//! | archived | `{base}_productosBorrados.json` | `[]` |
//! | counter | `{base}_lastId.json` | absent, counter starts at 1 |

use std::path::{Path, PathBuf};

const ACTIVE_SUFFIX: &str = "_stockActual.json";
const ARCHIVED_SUFFIX: &str = "_productosBorrados.json";
const LAST_ID_SUFFIX: &str = "_lastId.json";

/// Paths of the three artifacts backing one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Products currently in stock.
    pub active: PathBuf,
    /// Products removed from stock, append-only.
    pub archived: PathBuf,
    /// The last id handed out.
    pub last_id: PathBuf,
}

impl ArtifactPaths {
    /// Derives the artifact paths for `base_name` inside `dir`.
    pub fn new(dir: impl AsRef<Path>, base_name: &str) -> Self {
        let dir = dir.as_ref();
        Self {
            active: dir.join(format!("{base_name}{ACTIVE_SUFFIX}")),
            archived: dir.join(format!("{base_name}{ARCHIVED_SUFFIX}")),
            last_id: dir.join(format!("{base_name}{LAST_ID_SUFFIX}")),
        }
    }
}
