//! Whole-file JSON reads and writes.
//!
//! Every helper reads or replaces the complete file; there is no partial update.

use super::error::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Reads and parses the whole file at `path`.
pub(crate) async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let bytes = fs::read(path).await.map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`read_json`], but a missing file yields `T::default()`.
pub(crate) async fn read_json_or_default<T>(path: &Path) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    match read_json(path).await {
        Err(StoreError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
            Ok(T::default())
        }
        other => other,
    }
}

/// Replaces the file at `path` with `value` pretty-printed (two-space indent).
pub(crate) async fn write_pretty<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    write_bytes(path, &bytes).await
}

/// Replaces the file at `path` with `value` in compact form.
pub(crate) async fn write_compact<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec(value).map_err(|source| StoreError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    write_bytes(path, &bytes).await
}

/// Creates `path` holding `contents` unless it already exists.
///
/// Returns `true` if the file was created. An existing file is never opened for
/// writing, so repeated calls cannot truncate it.
pub(crate) async fn create_if_missing(path: &Path, contents: &[u8]) -> Result<bool, StoreError> {
    let open = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await;
    let mut file = match open {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(source) => {
            return Err(StoreError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    file.write_all(contents)
        .await
        .map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    file.flush().await.map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

async fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    fs::write(path, bytes)
        .await
        .map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
}
