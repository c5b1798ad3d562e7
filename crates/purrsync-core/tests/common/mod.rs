#![allow(dead_code, clippy::unwrap_used)]
// Test doubles for the remote and store ports.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use purrsync_api::{CatImage, Favourite, FavouriteImage};

use purrsync_core::{
    FavouriteRecord, FavouriteStore, MemoryFavouriteStore, RemotePort, RemoteResponse, StoreError,
    TransportFailure,
};

pub type Reply<T> = Result<RemoteResponse<T>, TransportFailure>;

// ── Remote ──────────────────────────────────────────────────────────

/// Scripted remote. Pages without a reply return an empty 200.
#[derive(Default)]
pub struct FakeRemote {
    pages: Mutex<HashMap<u32, Reply<Vec<CatImage>>>>,
    delays: Mutex<HashMap<u32, Duration>>,
    favourites: Mutex<Option<Reply<Vec<Favourite>>>>,
    pub item_calls: AtomicUsize,
    pub favourite_calls: AtomicUsize,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, page: u32, reply: Reply<Vec<CatImage>>) -> Self {
        self.pages.lock().unwrap().insert(page, reply);
        self
    }

    pub fn with_delay(self, page: u32, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(page, delay);
        self
    }

    pub fn with_favourites(self, reply: Reply<Vec<Favourite>>) -> Self {
        *self.favourites.lock().unwrap() = Some(reply);
        self
    }

    pub fn item_calls(&self) -> usize {
        self.item_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemotePort for FakeRemote {
    async fn get_items(&self, page: u32) -> Reply<Vec<CatImage>> {
        self.item_calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delays.lock().unwrap().get(&page).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.pages
            .lock()
            .unwrap()
            .get(&page)
            .cloned()
            .unwrap_or_else(|| Ok(RemoteResponse::ok(Vec::new())))
    }

    async fn get_favourites(&self, _user_id: &str) -> Reply<Vec<Favourite>> {
        self.favourite_calls.fetch_add(1, Ordering::SeqCst);
        self.favourites
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(RemoteResponse::ok(Vec::new())))
    }
}

// ── Store ───────────────────────────────────────────────────────────

/// Wraps the memory store and can be told to fail every call.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryFavouriteStore,
    pub failing: AtomicBool,
}

impl FlakyStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        store
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("disk full".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FavouriteStore for FlakyStore {
    async fn list_favourite_ids(&self) -> Result<HashSet<String>, StoreError> {
        self.check()?;
        self.inner.list_favourite_ids().await
    }

    async fn insert_favourite(&self, image_id: &str) -> Result<FavouriteRecord, StoreError> {
        self.check()?;
        self.inner.insert_favourite(image_id).await
    }

    async fn delete_favourite(&self, image_id: &str) -> Result<(), StoreError> {
        self.check()?;
        self.inner.delete_favourite(image_id).await
    }

    async fn list_favourites(&self) -> Result<Vec<FavouriteRecord>, StoreError> {
        self.check()?;
        self.inner.list_favourites().await
    }
}

// ── Payload builders ────────────────────────────────────────────────

pub fn image(id: &str) -> CatImage {
    CatImage {
        id: id.into(),
        url: format!("https://cdn2.thecatapi.com/images/{id}.jpg"),
        width: Some(100),
        height: Some(100),
        breeds: Vec::new(),
    }
}

pub fn favourite(fav_id: i64, image_id: &str) -> Favourite {
    Favourite {
        id: fav_id,
        image_id: image_id.into(),
        sub_id: Some("u1".into()),
        created_at: None,
        image: FavouriteImage {
            id: Some(image_id.into()),
            url: Some(format!("https://cdn2.thecatapi.com/images/{image_id}.jpg")),
        },
    }
}
