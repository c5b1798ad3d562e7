// ── Domain model ──
//
// Canonical types the repository emits and the controller folds into state.

mod favourite;
mod item;

pub use favourite::FavouriteRecord;
pub use item::Item;
