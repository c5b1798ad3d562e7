// ── Use cases ──
//
// One trait per operation the controller performs. The default
// implementations forward to the repository untouched; tests swap in
// their own.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::model::Item;
use crate::repository::{CatsRepository, ResultStream};

/// Fetch one page of items.
pub trait GetItems: Send + Sync {
    fn execute(&self, page: u32) -> ResultStream<Vec<Item>>;
}

/// Fetch a user's favourites.
pub trait GetFavourites: Send + Sync {
    fn execute(&self, user_id: &str) -> ResultStream<Vec<Item>>;
}

/// Flip the persisted favourite state of an item.
#[async_trait]
pub trait ToggleFavourite: Send + Sync {
    async fn execute(&self, item: &Item) -> Result<(), CoreError>;
}

pub struct GetItemsUseCase {
    repository: Arc<CatsRepository>,
}

impl GetItemsUseCase {
    pub fn new(repository: Arc<CatsRepository>) -> Self {
        Self { repository }
    }
}

impl GetItems for GetItemsUseCase {
    fn execute(&self, page: u32) -> ResultStream<Vec<Item>> {
        self.repository.fetch_items(page)
    }
}

pub struct GetFavouritesUseCase {
    repository: Arc<CatsRepository>,
}

impl GetFavouritesUseCase {
    pub fn new(repository: Arc<CatsRepository>) -> Self {
        Self { repository }
    }
}

impl GetFavourites for GetFavouritesUseCase {
    fn execute(&self, user_id: &str) -> ResultStream<Vec<Item>> {
        self.repository.fetch_favourites(user_id)
    }
}

pub struct ToggleFavouriteUseCase {
    repository: Arc<CatsRepository>,
}

impl ToggleFavouriteUseCase {
    pub fn new(repository: Arc<CatsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ToggleFavourite for ToggleFavouriteUseCase {
    async fn execute(&self, item: &Item) -> Result<(), CoreError> {
        self.repository.toggle_favourite(item).await
    }
}

/// The set of operations a [`CatsController`](crate::CatsController) drives.
#[derive(Clone)]
pub struct UseCases {
    pub get_items: Arc<dyn GetItems>,
    pub get_favourites: Arc<dyn GetFavourites>,
    pub toggle_favourite: Arc<dyn ToggleFavourite>,
}

impl UseCases {
    /// Wire the default use cases to one repository.
    pub fn from_repository(repository: &Arc<CatsRepository>) -> Self {
        Self {
            get_items: Arc::new(GetItemsUseCase::new(Arc::clone(repository))),
            get_favourites: Arc::new(GetFavouritesUseCase::new(Arc::clone(repository))),
            toggle_favourite: Arc::new(ToggleFavouriteUseCase::new(Arc::clone(repository))),
        }
    }
}
