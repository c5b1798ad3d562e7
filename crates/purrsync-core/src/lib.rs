//! Data synchronization layer between `purrsync-api` and UI consumers.
//!
//! This crate reconciles the remote image list with a small local set of
//! favourited image ids and exposes the result as observable state:
//!
//! - **[`NetworkResult`]**: the envelope every asynchronous operation
//!   emits. `Loading` first, then exactly one of `Success` / `Error`.
//!
//! - **Ports** ([`RemotePort`], [`FavouriteStore`]): the two collaborators
//!   the core depends on. [`CatApiRemote`] adapts the HTTP client;
//!   [`MemoryFavouriteStore`] and [`FileFavouriteStore`] are the local stores.
//!
//! - **[`CatsRepository`]**: lazy per-request streams that merge
//!   favourite membership into fetched items, plus the favourite toggle.
//!
//! - **Use cases** ([`GetItems`], [`GetFavourites`], [`ToggleFavourite`]):
//!   pass-through seams so the controller can be driven by test doubles.
//!
//! - **[`CatsController`]**: owns [`UiState`] behind a `watch` channel,
//!   folds every emission through [`UiState::reduce`], and publishes
//!   one-shot [`Effect`]s on a separate consume-once channel.

pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod port;
pub mod remote;
pub mod repository;
pub mod result;
pub mod state;
pub mod store;
pub mod usecase;

// ── Primary re-exports ──────────────────────────────────────────────
pub use controller::CatsController;
pub use error::{CoreError, StoreError, TransportFailure};
pub use model::{FavouriteRecord, Item};
pub use port::{FavouriteStore, RemotePort, RemoteResponse};
pub use remote::CatApiRemote;
pub use repository::{CatsRepository, ResultStream};
pub use result::NetworkResult;
pub use state::{Effect, Feed, Route, UiState};
pub use store::{FileFavouriteStore, MemoryFavouriteStore};
pub use usecase::{
    GetFavourites, GetFavouritesUseCase, GetItems, GetItemsUseCase, ToggleFavourite,
    ToggleFavouriteUseCase, UseCases,
};
