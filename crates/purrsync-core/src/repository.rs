// ── Repository ──
//
// Reconciles the remote image feed with the local favourite store.
// Fetches are exposed as lazy streams of `NetworkResult`; nothing is
// requested until the stream is first polled.

use std::collections::HashSet;
use std::sync::Arc;

use async_stream::stream;
use futures_util::stream::BoxStream;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::model::Item;
use crate::port::{FavouriteStore, RemotePort};
use crate::result::NetworkResult;

/// Stream emitted for a single request: `Loading`, then one terminal value.
pub type ResultStream<T> = BoxStream<'static, NetworkResult<T>>;

/// Composes the remote and local-store ports.
///
/// Cheap to share behind an `Arc`; each fetch clones the port handles
/// into its own stream so streams outlive the borrow of `self`.
pub struct CatsRepository {
    remote: Arc<dyn RemotePort>,
    store: Arc<dyn FavouriteStore>,
}

impl CatsRepository {
    pub fn new(remote: Arc<dyn RemotePort>, store: Arc<dyn FavouriteStore>) -> Self {
        Self { remote, store }
    }

    /// Access the injected favourite store.
    pub fn store(&self) -> &Arc<dyn FavouriteStore> {
        &self.store
    }

    /// Fetch one page of images with favourite status merged in.
    ///
    /// Transport failures and non-2xx responses become `Error`. No retry.
    pub fn fetch_items(&self, page: u32) -> ResultStream<Vec<Item>> {
        let remote = Arc::clone(&self.remote);
        let store = Arc::clone(&self.store);
        Box::pin(stream! {
            yield NetworkResult::Loading;
            yield terminal("items", load_items(remote.as_ref(), store.as_ref(), page).await);
        })
    }

    /// Fetch the favourites stored remotely for `user_id`.
    ///
    /// The list is emitted as-is; every entry is already a favourite.
    pub fn fetch_favourites(&self, user_id: &str) -> ResultStream<Vec<Item>> {
        let remote = Arc::clone(&self.remote);
        let user_id = user_id.to_owned();
        Box::pin(stream! {
            yield NetworkResult::Loading;
            yield terminal("favourites", load_favourites(remote.as_ref(), &user_id).await);
        })
    }

    /// Flip the persisted favourite state of `item`.
    ///
    /// A non-favourite is inserted, a favourite is deleted. Store failures
    /// are returned to the caller rather than folded into a result.
    pub async fn toggle_favourite(&self, item: &Item) -> Result<(), CoreError> {
        if item.is_favourite {
            self.store.delete_favourite(&item.id).await?;
            debug!(image_id = %item.id, "removed favourite");
        } else {
            let record = self.store.insert_favourite(&item.id).await?;
            debug!(image_id = %item.id, favourite_id = record.favourite_id, "added favourite");
        }
        Ok(())
    }
}

async fn load_items(
    remote: &dyn RemotePort,
    store: &dyn FavouriteStore,
    page: u32,
) -> Result<Vec<Item>, CoreError> {
    let images = remote.get_items(page).await?.into_body()?;
    let favourite_ids = store.list_favourite_ids().await?;
    let items = images.into_iter().map(Item::from).collect();
    Ok(mark_favourites(items, &favourite_ids))
}

async fn load_favourites(remote: &dyn RemotePort, user_id: &str) -> Result<Vec<Item>, CoreError> {
    let favourites = remote.get_favourites(user_id).await?.into_body()?;
    Ok(favourites.into_iter().map(Item::from).collect())
}

fn terminal(feed: &str, outcome: Result<Vec<Item>, CoreError>) -> NetworkResult<Vec<Item>> {
    match outcome {
        Ok(items) => {
            debug!(feed, count = items.len(), "fetch succeeded");
            NetworkResult::Success(items)
        }
        Err(e) => {
            warn!(feed, error = %e, "fetch failed");
            NetworkResult::Error(e.to_string())
        }
    }
}

/// Set `is_favourite` on every item whose id is in `favourite_ids`.
///
/// One pass over `items` with set lookups; order is preserved.
pub fn mark_favourites(mut items: Vec<Item>, favourite_ids: &HashSet<String>) -> Vec<Item> {
    for item in &mut items {
        item.is_favourite = favourite_ids.contains(&item.id);
    }
    items
}
