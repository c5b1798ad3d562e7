// ── Controller abstraction ──
//
// Owns one screen's `UiState`. Commands start use-case streams as
// spawned subscriptions; every emission is folded through
// `UiState::reduce`. Effects go out on a separate consume-once channel.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use futures_util::StreamExt;
use tokio::sync::{Mutex, mpsc, watch};
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::model::Item;
use crate::repository::{CatsRepository, ResultStream};
use crate::result::NetworkResult;
use crate::state::{Effect, Feed, Route, UiState};
use crate::usecase::UseCases;

// ── Shared reducer state ─────────────────────────────────────────

/// The part of the controller its subscription tasks hold on to.
///
/// Tasks never hold the controller itself, so dropping the controller
/// is what tears them down.
struct Shared {
    state: watch::Sender<UiState>,
    /// Set once, when the effect receiver is taken.
    effect_tx: OnceLock<mpsc::UnboundedSender<Effect>>,
}

impl Shared {
    /// Fold `result` into state unless `token` has been cancelled.
    ///
    /// The check runs under the watch channel's write lock, the same lock
    /// `cancel` takes, so a cancelled subscription can never reach the
    /// reducer once `cancel` has returned.
    fn apply(&self, feed: Feed, token: &CancellationToken, result: NetworkResult<Vec<Item>>) {
        let mut effect = None;
        self.state.send_if_modified(|state| {
            if token.is_cancelled() {
                return false;
            }
            effect = state.reduce(feed, result);
            true
        });
        if let Some(effect) = effect {
            self.emit(effect);
        }
    }

    /// Cancel `token` while holding the state write lock.
    fn cancel(&self, token: &CancellationToken) {
        self.state.send_if_modified(|_| {
            token.cancel();
            false
        });
    }

    /// Deliver `effect` to the effect receiver. Effects raised before the
    /// receiver is taken, or after it is dropped, are discarded.
    fn emit(&self, effect: Effect) {
        let Some(tx) = self.effect_tx.get() else {
            debug!(?effect, "no effect consumer; discarding effect");
            return;
        };
        if tx.send(effect).is_err() {
            debug!("effect receiver dropped; discarding effect");
        }
    }
}

/// A running fetch for one feed.
struct Subscription {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

// ── CatsController ───────────────────────────────────────────────

/// State holder for one screen.
///
/// Deliberately not `Clone`: its scope is the screen's scope. Dropping it
/// (or calling [`shutdown()`](Self::shutdown)) cancels every in-flight
/// request, and no cancelled request mutates state afterwards.
pub struct CatsController {
    use_cases: UseCases,
    shared: Arc<Shared>,
    subscriptions: Mutex<HashMap<Feed, Subscription>>,
    cancel: CancellationToken,
}

impl CatsController {
    /// Create a controller with default (empty, not loading) state.
    ///
    /// Subscriptions are spawned on the current Tokio runtime.
    pub fn new(use_cases: UseCases) -> Self {
        let (state, _) = watch::channel(UiState::default());

        Self {
            use_cases,
            shared: Arc::new(Shared {
                state,
                effect_tx: OnceLock::new(),
            }),
            subscriptions: Mutex::new(HashMap::new()),
            cancel: CancellationToken::new(),
        }
    }

    /// Convenience constructor wiring the default use cases.
    pub fn from_repository(repository: &Arc<CatsRepository>) -> Self {
        Self::new(UseCases::from_repository(repository))
    }

    // ── Observation ──────────────────────────────────────────────

    /// Subscribe to state changes.
    pub fn state(&self) -> watch::Receiver<UiState> {
        self.shared.state.subscribe()
    }

    /// State changes as a `Stream`, starting with the current value.
    pub fn state_stream(&self) -> WatchStream<UiState> {
        WatchStream::new(self.state())
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> UiState {
        self.shared.state.borrow().clone()
    }

    /// Take the effect receiver. Only the first call gets it; effects are
    /// delivered once to whoever holds it.
    ///
    /// Until this is called, effects are dropped rather than queued.
    pub fn take_effects(&self) -> Option<mpsc::UnboundedReceiver<Effect>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.shared.effect_tx.set(tx).ok().map(|()| rx)
    }

    // ── Commands ─────────────────────────────────────────────────

    /// Load one page of items, replacing any items request in flight.
    pub async fn load(&self, page: u32) {
        debug!(page, "load requested");
        let stream = self.use_cases.get_items.execute(page);
        self.subscribe(Feed::Items, stream).await;
    }

    /// Load a user's favourites, replacing any favourites request in flight.
    pub async fn load_favourites(&self, user_id: &str) {
        debug!(user_id, "favourites requested");
        let stream = self.use_cases.get_favourites.execute(user_id);
        self.subscribe(Feed::Favourites, stream).await;
    }

    /// Toggle the favourite state of `item`.
    ///
    /// On success the flag is flipped in state right away, without a
    /// re-fetch. On failure nothing is flipped; the error lands in
    /// `error_message`, an error effect is emitted, and the error is
    /// returned.
    pub async fn toggle_favourite(&self, item: &Item) -> Result<(), CoreError> {
        match self.use_cases.toggle_favourite.execute(item).await {
            Ok(()) => {
                let now_favourite = !item.is_favourite;
                self.shared
                    .state
                    .send_if_modified(|state| state.set_favourite(&item.id, now_favourite));
                debug!(image_id = %item.id, now_favourite, "favourite toggled");
                Ok(())
            }
            Err(e) => {
                warn!(image_id = %item.id, error = %e, "favourite toggle failed");
                let message = e.to_string();
                self.shared.state.send_modify(|state| {
                    state.error_message = Some(message.clone());
                });
                self.shared.emit(Effect::ShowError { message });
                Err(e)
            }
        }
    }

    /// Request navigation. Routing itself belongs to the presentation layer.
    pub fn navigate(&self, route: Route) {
        debug!(%route, "navigation requested");
        self.shared.emit(Effect::Navigate(route));
    }

    // ── Lifecycle ────────────────────────────────────────────────

    /// Wait for every request currently in flight to finish.
    pub async fn settle(&self) {
        let handles: Vec<JoinHandle<()>> = {
            let mut subs = self.subscriptions.lock().await;
            subs.values_mut().filter_map(|s| s.handle.take()).collect()
        };
        for handle in handles {
            if let Err(e) = handle.await {
                warn!(error = %e, "subscription task failed");
            }
        }
    }

    /// Cancel all requests and wait for their tasks to exit.
    ///
    /// Commands issued afterwards start already-cancelled subscriptions.
    pub async fn shutdown(&self) {
        self.shared.cancel(&self.cancel);
        self.settle().await;
        info!("controller shut down");
    }

    // ── Internals ────────────────────────────────────────────────

    async fn subscribe(&self, feed: Feed, mut stream: ResultStream<Vec<Item>>) {
        let mut subs = self.subscriptions.lock().await;

        if let Some(previous) = subs.remove(&feed) {
            self.shared.cancel(&previous.cancel);
            debug!(%feed, "cancelled superseded request");
        }

        let token = self.cancel.child_token();
        let task_token = token.clone();
        let shared = Arc::clone(&self.shared);

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;

                    () = task_token.cancelled() => break,

                    next = stream.next() => match next {
                        Some(result) => shared.apply(feed, &task_token, result),
                        None => break,
                    },
                }
            }
        });

        subs.insert(
            feed,
            Subscription {
                cancel: token,
                handle: Some(handle),
            },
        );
    }
}

impl Drop for CatsController {
    fn drop(&mut self) {
        self.shared.cancel(&self.cancel);
    }
}
