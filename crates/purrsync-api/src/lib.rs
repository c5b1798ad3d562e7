// purrsync-api: Async Rust client for The Cat API (image search + favourites)

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{ApiResponse, CatApiClient, DEFAULT_BASE_URL};
pub use error::Error;
pub use transport::TransportConfig;
pub use types::{Breed, CatImage, Favourite, FavouriteImage};
