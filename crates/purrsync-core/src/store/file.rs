// ── File-backed favourite store ──
//
// Persists favourites as a small JSON document. Every mutation rewrites
// the document through a temp file + rename so a crash never leaves a
// half-written file behind.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::StoreError;
use crate::model::FavouriteRecord;
use crate::port::FavouriteStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Document {
    next_id: i64,
    records: BTreeMap<String, FavouriteRecord>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: BTreeMap::new(),
        }
    }
}

/// A favourite store persisted to a JSON file.
///
/// All mutations are serialized by one async mutex; the in-memory copy
/// only changes after the file write succeeds.
#[derive(Debug)]
pub struct FileFavouriteStore {
    path: PathBuf,
    doc: Mutex<Document>,
}

impl FileFavouriteStore {
    /// Open the store at `path`, starting empty if the file does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let doc = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => Document::default(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Document::default(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), count = doc.records.len(), "opened favourite store");
        Ok(Self {
            path,
            doc: Mutex::new(doc),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, doc: &Document) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let bytes = serde_json::to_vec_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl FavouriteStore for FileFavouriteStore {
    async fn list_favourite_ids(&self) -> Result<HashSet<String>, StoreError> {
        Ok(self.doc.lock().await.records.keys().cloned().collect())
    }

    async fn insert_favourite(&self, image_id: &str) -> Result<FavouriteRecord, StoreError> {
        let mut doc = self.doc.lock().await;
        let mut next = doc.clone();
        let record = FavouriteRecord {
            favourite_id: next.next_id,
            image_id: image_id.to_owned(),
        };
        next.next_id += 1;
        next.records.insert(image_id.to_owned(), record.clone());
        self.persist(&next).await?;
        *doc = next;
        Ok(record)
    }

    async fn delete_favourite(&self, image_id: &str) -> Result<(), StoreError> {
        let mut doc = self.doc.lock().await;
        if !doc.records.contains_key(image_id) {
            return Ok(());
        }
        let mut next = doc.clone();
        next.records.remove(image_id);
        self.persist(&next).await?;
        *doc = next;
        Ok(())
    }

    async fn list_favourites(&self) -> Result<Vec<FavouriteRecord>, StoreError> {
        let mut records: Vec<FavouriteRecord> =
            self.doc.lock().await.records.values().cloned().collect();
        records.sort_by_key(|r| r.favourite_id);
        Ok(records)
    }
}
