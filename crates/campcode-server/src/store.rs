//! Idempotency store: a JSON file mapping normalized campaign identity to
//! the code first generated for it. Writes go through a temp file and
//! rename so a crash never leaves a half-written store on disk.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

/// Errors from the idempotency store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid store path: {0}")]
    InvalidPath(String),
}

/// Key-value lookup for previously generated codes.
///
/// Concurrency discipline is the caller's responsibility; the service
/// wraps the store in a mutex for single-writer access.
pub trait CodeStore {
    fn get(&self, key: &str) -> Option<&str>;
    fn put(&mut self, key: String, code: String) -> Result<(), StoreError>;
}

/// File-backed store. The whole map is held in memory and rewritten
/// atomically on every put; campaign catalogs are small.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`, starting empty when the file is missing.
    /// An unreadable or corrupt file is treated as empty rather than
    /// failing the service; the next put replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read(&path) {
            Ok(data) => serde_json::from_slice(&data).unwrap_or_else(|err| {
                warn!(path = %path.display(), error = %err, "store unreadable, starting empty");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self { path, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<(), StoreError> {
        write_json_atomic(&self.path, &self.entries)
    }
}

impl CodeStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn put(&mut self, key: String, code: String) -> Result<(), StoreError> {
        self.entries.insert(key, code);
        self.persist()
    }
}

/// Normalizes a `(campaign_name, campaign_description)` pair into a store
/// key: trimmed, upper-cased, inner whitespace collapsed to single spaces.
pub fn normalize_key(name: &str, description: &str) -> String {
    format!("{}||{}", collapse(name), collapse(description))
}

fn collapse(text: &str) -> String {
    text.to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_json_atomic<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let data = serde_json::to_vec_pretty(value)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidPath(path.display().to_string()))?;
    let tmp_path = path.with_file_name(format!("{}.tmp", file_name.to_string_lossy()));

    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(&data)?;
    file.sync_all()?;

    std::fs::rename(&tmp_path, path)?;
    Ok(())
}
