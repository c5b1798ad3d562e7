// ── Ports ──
//
// The two collaborators the repository depends on. Both are owned by the
// composition root and injected; the core never constructs them itself.

use std::collections::HashSet;

use async_trait::async_trait;
use purrsync_api::{ApiResponse, CatImage, Favourite};

use crate::error::{CoreError, StoreError, TransportFailure};
use crate::model::FavouriteRecord;

/// A response from the remote, before the repository interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse<T> {
    pub status: u16,
    pub body: Option<T>,
    pub message: Option<String>,
}

impl<T> RemoteResponse<T> {
    /// A 200 response carrying `body`.
    pub fn ok(body: T) -> Self {
        Self {
            status: 200,
            body: Some(body),
            message: None,
        }
    }

    /// A non-2xx response.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: None,
            message: Some(message.into()),
        }
    }

    /// Extract the payload of a 2xx response.
    ///
    /// Non-2xx becomes [`CoreError::Remote`]. A 2xx without a decodable
    /// body becomes [`CoreError::InvalidPayload`]. An empty list is a
    /// valid payload.
    pub fn into_body(self) -> Result<T, CoreError> {
        if !(200..300).contains(&self.status) {
            return Err(CoreError::Remote {
                status: self.status,
                message: self.message,
            });
        }
        self.body.ok_or_else(|| CoreError::InvalidPayload {
            message: self.message.unwrap_or_else(|| "empty response body".into()),
        })
    }
}

impl<T> From<ApiResponse<T>> for RemoteResponse<T> {
    fn from(resp: ApiResponse<T>) -> Self {
        Self {
            status: resp.status,
            body: resp.body,
            message: resp.message,
        }
    }
}

/// Source of truth for images and a user's remote favourites.
#[async_trait]
pub trait RemotePort: Send + Sync {
    async fn get_items(&self, page: u32) -> Result<RemoteResponse<Vec<CatImage>>, TransportFailure>;

    async fn get_favourites(
        &self,
        user_id: &str,
    ) -> Result<RemoteResponse<Vec<Favourite>>, TransportFailure>;
}

/// Local set of favourited image ids.
///
/// Implementations must make each mutation atomic per key: concurrent
/// toggles on different ids never corrupt each other's records.
#[async_trait]
pub trait FavouriteStore: Send + Sync {
    async fn list_favourite_ids(&self) -> Result<HashSet<String>, StoreError>;

    /// Insert (or overwrite) the record for `image_id`.
    async fn insert_favourite(&self, image_id: &str) -> Result<FavouriteRecord, StoreError>;

    /// Delete the record for `image_id`. Missing ids are not an error.
    async fn delete_favourite(&self, image_id: &str) -> Result<(), StoreError>;

    /// All records, oldest first.
    async fn list_favourites(&self) -> Result<Vec<FavouriteRecord>, StoreError>;
}
