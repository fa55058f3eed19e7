// ABOUTME: Filesystem key-value backend storing one JSON document per key
// ABOUTME: Writes land in a temporary sibling file and are renamed into place atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use async_trait::async_trait;
use fitlog_core::errors::{AppError, AppResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

/// Extension of stored documents
const DOCUMENT_EXTENSION: &str = "json";

/// Key-value store backed by a directory of `<key>.json` files
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`; the directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the documents
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> AppResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.{DOCUMENT_EXTENSION}")))
    }
}

/// Keys become file names, so only a conservative character set is allowed
fn validate_key(key: &str) -> AppResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "storage key '{key}' may only contain letters, digits, '_' and '-'"
        )))
    }
}

fn unavailable(action: &str, path: &Path, error: std::io::Error) -> AppError {
    AppError::storage_unavailable(format!("failed to {action} {}: {error}", path.display()))
        .with_source(error)
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.document_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable("read", &path, e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.document_path(key)?;
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| unavailable("create", &self.root, e))?;

        let tmp_path = self
            .root
            .join(format!(".{key}.{}.tmp", Uuid::new_v4().simple()));
        if let Err(e) = fs::write(&tmp_path, value).await {
            return Err(unavailable("write", &tmp_path, e));
        }
        if let Err(e) = fs::rename(&tmp_path, &path).await {
            // Leave no partial document behind; the original is untouched
            if let Err(cleanup) = fs::remove_file(&tmp_path).await {
                debug!(error = %cleanup, "Failed to remove temporary document");
            }
            return Err(unavailable("replace", &path, e));
        }

        debug!(key = key, bytes = value.len(), "Document written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.document_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(unavailable("remove", &path, e)),
        }
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        let mut dir = match fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(unavailable("list", &self.root, e)),
        };

        let mut keys = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| unavailable("list", &self.root, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(DOCUMENT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if validate_key(stem).is_ok() {
                    keys.push(stem.to_owned());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    async fn health_check(&self) -> AppResult<()> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| unavailable("create", &self.root, e))?;
        let metadata = fs::metadata(&self.root)
            .await
            .map_err(|e| unavailable("inspect", &self.root, e))?;
        if metadata.permissions().readonly() {
            return Err(AppError::storage_unavailable(format!(
                "data directory {} is read-only",
                self.root.display()
            )));
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_validation() {
        assert!(validate_key("auth_user").is_ok());
        assert!(validate_key("meals").is_ok());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("").is_err());
        assert!(validate_key("a b").is_err());
    }
}
