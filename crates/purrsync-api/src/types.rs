//! Response types for The Cat API (v1).
//!
//! Field names match the JSON payloads, which are already snake_case.
//! Optional fields default so that sparse payloads still decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Images ───────────────────────────────────────────────────────────

/// One image from `GET /v1/images/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatImage {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Only populated for images with breed metadata.
    #[serde(default)]
    pub breeds: Vec<Breed>,
}

/// Breed metadata attached to an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub id: String,
    pub name: String,
}

// ── Favourites ───────────────────────────────────────────────────────

/// One favourite from `GET /v1/favourites?sub_id={user}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favourite {
    pub id: i64,
    pub image_id: String,
    #[serde(default)]
    pub sub_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image: FavouriteImage,
}

/// The image embedded in a favourite. The API sends `{}` when the image
/// has since been deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavouriteImage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
