use serde::{Deserialize, Serialize};

/// A cat image as the presentation layer sees it.
///
/// `id` is unique within one fetched batch. `is_favourite` reflects the
/// local favourite store, never the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub is_favourite: bool,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: image_url.into(),
            is_favourite: false,
        }
    }

    /// Builder-style setter for the favourite flag.
    pub fn with_favourite(mut self, is_favourite: bool) -> Self {
        self.is_favourite = is_favourite;
        self
    }
}
