use serde::{Deserialize, Serialize};

/// A locally persisted favourite.
///
/// `image_id` is the primary key: a store holds at most one record per
/// image. `favourite_id` is assigned by the store when the record is
/// written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavouriteRecord {
    pub favourite_id: i64,
    pub image_id: String,
}
