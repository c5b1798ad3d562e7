// ── API → domain conversion ──
//
// Raw Cat API payloads become `Item`s here. Favourite marking is the
// repository's job; conversion only sets it for the favourites feed.

use purrsync_api::{CatImage, Favourite};

use crate::model::Item;

impl From<CatImage> for Item {
    fn from(img: CatImage) -> Self {
        let name = img
            .breeds
            .into_iter()
            .next()
            .map_or_else(|| img.id.clone(), |breed| breed.name);
        Item::new(img.id, name, img.url)
    }
}

impl From<Favourite> for Item {
    fn from(fav: Favourite) -> Self {
        let image_url = fav.image.url.unwrap_or_default();
        let name = fav.image.id.unwrap_or_else(|| fav.image_id.clone());
        Item::new(fav.image_id, name, image_url).with_favourite(true)
    }
}
