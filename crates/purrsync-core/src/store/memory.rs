// ── In-memory favourite store ──
//
// Concurrent per-key storage with O(1) membership checks.

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::StoreError;
use crate::model::FavouriteRecord;
use crate::port::FavouriteStore;

/// A favourite store that lives only as long as the process.
///
/// Uses `DashMap` so each insert/delete holds only the shard lock for its
/// key; toggles on different ids never contend on a global lock.
#[derive(Debug)]
pub struct MemoryFavouriteStore {
    records: DashMap<String, FavouriteRecord>,
    next_id: AtomicI64,
}

impl MemoryFavouriteStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seed the store with existing favourite ids.
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        for id in ids {
            store.put(id.into());
        }
        store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, image_id: &str) -> bool {
        self.records.contains_key(image_id)
    }

    fn put(&self, image_id: String) -> FavouriteRecord {
        let record = FavouriteRecord {
            favourite_id: self.next_id.fetch_add(1, Ordering::Relaxed),
            image_id: image_id.clone(),
        };
        self.records.insert(image_id, record.clone());
        record
    }
}

impl Default for MemoryFavouriteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavouriteStore for MemoryFavouriteStore {
    async fn list_favourite_ids(&self) -> Result<HashSet<String>, StoreError> {
        Ok(self.records.iter().map(|r| r.key().clone()).collect())
    }

    async fn insert_favourite(&self, image_id: &str) -> Result<FavouriteRecord, StoreError> {
        Ok(self.put(image_id.to_owned()))
    }

    async fn delete_favourite(&self, image_id: &str) -> Result<(), StoreError> {
        self.records.remove(image_id);
        Ok(())
    }

    async fn list_favourites(&self) -> Result<Vec<FavouriteRecord>, StoreError> {
        let mut records: Vec<FavouriteRecord> =
            self.records.iter().map(|r| r.value().clone()).collect();
        records.sort_by_key(|r| r.favourite_id);
        Ok(records)
    }
}
