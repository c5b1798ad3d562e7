// ── Local favourite stores ──
//
// Implementations of `FavouriteStore`. The composition root picks one
// and injects it into the repository.

mod file;
mod memory;

pub use file::FileFavouriteStore;
pub use memory::MemoryFavouriteStore;
