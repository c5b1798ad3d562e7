// ── Remote port adapter ──
//
// Binds `RemotePort` to the Cat API HTTP client.

use async_trait::async_trait;
use purrsync_api::{CatApiClient, CatImage, Favourite};
use tracing::debug;

use crate::error::TransportFailure;
use crate::port::{RemotePort, RemoteResponse};

/// Default number of images per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// [`RemotePort`] backed by [`CatApiClient`].
#[derive(Debug, Clone)]
pub struct CatApiRemote {
    client: CatApiClient,
    page_size: u32,
}

impl CatApiRemote {
    pub fn new(client: CatApiClient) -> Self {
        Self {
            client,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size (clamped to at least 1).
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[async_trait]
impl RemotePort for CatApiRemote {
    async fn get_items(&self, page: u32) -> Result<RemoteResponse<Vec<CatImage>>, TransportFailure> {
        debug!(page, limit = self.page_size, "fetching images");
        let resp = self.client.search_images(page, self.page_size).await?;
        Ok(resp.into())
    }

    async fn get_favourites(
        &self,
        user_id: &str,
    ) -> Result<RemoteResponse<Vec<Favourite>>, TransportFailure> {
        debug!(user_id, "fetching remote favourites");
        let resp = self.client.list_favourites(user_id).await?;
        Ok(resp.into())
    }
}
