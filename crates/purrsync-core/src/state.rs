// ── UI state and effects ──
//
// `UiState` is what the presentation layer renders; `Effect`s are the
// one-shot signals that must not replay on re-render. `reduce` is the
// only place a `NetworkResult` touches state.

use strum::Display;
use tracing::debug;

use crate::model::Item;
use crate::result::NetworkResult;

/// Which field of [`UiState`] a stream feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Feed {
    Items,
    Favourites,
}

/// Navigation targets.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Route {
    #[strum(serialize = "homeRoute")]
    Home,
    #[strum(serialize = "myFavourites")]
    Favourites,
    #[strum(serialize = "detail")]
    Detail { image_id: String, url: String },
}

impl Route {
    /// Detail screen for one item.
    pub fn detail(item: &Item) -> Self {
        Self::Detail {
            image_id: item.id.clone(),
            url: item.image_url.clone(),
        }
    }
}

/// One-shot signal for the presentation layer, consumed at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowError { message: String },
    Navigate(Route),
}

/// Everything a screen renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub is_loading: bool,
    pub items: Vec<Item>,
    pub favourites: Vec<Item>,
    pub error_message: Option<String>,
}

impl UiState {
    /// Fold one emission for `feed` into the state.
    ///
    /// Data is only replaced on `Success`; `Loading` and `Error` keep the
    /// previous list visible. Returns the effect to publish, if any.
    pub fn reduce(&mut self, feed: Feed, result: NetworkResult<Vec<Item>>) -> Option<Effect> {
        match result {
            NetworkResult::Loading => {
                debug!(%feed, "loading");
                self.is_loading = true;
                None
            }
            NetworkResult::Success(data) => {
                debug!(%feed, count = data.len(), "settled");
                self.is_loading = false;
                self.error_message = None;
                match feed {
                    Feed::Items => self.items = data,
                    Feed::Favourites => self.favourites = data,
                }
                None
            }
            NetworkResult::Error(reason) => {
                debug!(%feed, %reason, "failed");
                self.is_loading = false;
                self.error_message = Some(reason.clone());
                Some(Effect::ShowError { message: reason })
            }
        }
    }

    /// Set the favourite flag on every item with `image_id`, in both lists.
    ///
    /// Returns `true` if anything changed.
    pub fn set_favourite(&mut self, image_id: &str, is_favourite: bool) -> bool {
        let mut changed = false;
        for item in self.items.iter_mut().chain(self.favourites.iter_mut()) {
            if item.id == image_id && item.is_favourite != is_favourite {
                item.is_favourite = is_favourite;
                changed = true;
            }
        }
        changed
    }

    /// Look up an item by id, preferring the main list.
    pub fn find(&self, image_id: &str) -> Option<&Item> {
        self.items
            .iter()
            .chain(self.favourites.iter())
            .find(|item| item.id == image_id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(id: &str) -> Item {
        Item::new(id, id, format!("https://cdn/{id}.jpg"))
    }

    #[test]
    fn loading_keeps_stale_data() {
        let mut state = UiState {
            items: vec![item("a")],
            ..UiState::default()
        };
        assert_eq!(state.reduce(Feed::Items, NetworkResult::Loading), None);
        assert!(state.is_loading);
        assert_eq!(state.items, vec![item("a")]);
    }

    #[test]
    fn success_replaces_feed_and_clears_error() {
        let mut state = UiState {
            is_loading: true,
            favourites: vec![item("f")],
            error_message: Some("old".into()),
            ..UiState::default()
        };
        let effect = state.reduce(Feed::Items, NetworkResult::Success(vec![item("b")]));

        assert_eq!(effect, None);
        assert_eq!(
            state,
            UiState {
                is_loading: false,
                items: vec![item("b")],
                favourites: vec![item("f")],
                error_message: None,
            }
        );
    }

    #[test]
    fn success_on_favourites_leaves_items() {
        let mut state = UiState {
            items: vec![item("a")],
            ..UiState::default()
        };
        state.reduce(Feed::Favourites, NetworkResult::Success(vec![item("f")]));
        assert_eq!(state.items, vec![item("a")]);
        assert_eq!(state.favourites, vec![item("f")]);
    }

    #[test]
    fn error_keeps_data_and_emits_effect() {
        let mut state = UiState {
            is_loading: true,
            items: vec![item("a")],
            ..UiState::default()
        };
        let effect = state.reduce(Feed::Items, NetworkResult::Error("boom".into()));

        assert_eq!(
            effect,
            Some(Effect::ShowError {
                message: "boom".into()
            })
        );
        assert!(!state.is_loading);
        assert_eq!(state.error_message.as_deref(), Some("boom"));
        assert_eq!(state.items, vec![item("a")]);
    }

    #[test]
    fn set_favourite_touches_both_lists() {
        let mut state = UiState {
            items: vec![item("a"), item("b")],
            favourites: vec![item("b").with_favourite(true)],
            ..UiState::default()
        };
        assert!(state.set_favourite("b", false));
        assert!(!state.items[1].is_favourite);
        assert!(!state.favourites[0].is_favourite);
        assert!(!state.set_favourite("b", false));
        assert!(!state.set_favourite("missing", true));
    }

    #[test]
    fn route_names() {
        assert_eq!(Route::Home.to_string(), "homeRoute");
        assert_eq!(Route::Favourites.to_string(), "myFavourites");
        assert_eq!(Route::detail(&item("a")).to_string(), "detail");
        assert_eq!(Feed::Favourites.to_string(), "favourites");
    }
}
