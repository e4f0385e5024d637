//! In-process state container backed by a tokio watch channel.

use std::sync::Arc;

use tokio::sync::watch;

use homeboard_domain::action::Action;
use homeboard_domain::error::HomeboardError;
use homeboard_domain::state::HomeState;

use crate::{reducer, seed};

/// Holds the current [`HomeState`] snapshot and applies actions to it.
///
/// Dispatches are applied one at a time, synchronously, under the watch
/// channel's lock. Readers get `Arc` snapshots that never change after
/// they are handed out. Subscribers are woken only when a dispatch
/// actually produced a new snapshot.
#[derive(Debug)]
pub struct HomeStore {
    sender: watch::Sender<Arc<HomeState>>,
}

impl HomeStore {
    /// Create a store holding `initial`.
    #[must_use]
    pub fn new(initial: HomeState) -> Self {
        let (sender, _) = watch::channel(Arc::new(initial));
        Self { sender }
    }

    /// Create a store holding the [seed](crate::seed) state.
    ///
    /// # Errors
    ///
    /// Propagates a validation error from the seed records.
    pub fn seeded() -> Result<Self, HomeboardError> {
        Ok(Self::new(seed::initial_state()?))
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> Arc<HomeState> {
        Arc::clone(&self.sender.borrow())
    }

    /// Apply `action` and return the resulting snapshot.
    ///
    /// Unrecognized actions and updates to unknown devices leave the state
    /// untouched and notify nobody.
    #[tracing::instrument(skip(self, action), fields(action = %action))]
    pub fn dispatch(&self, action: Action) -> Arc<HomeState> {
        let mut next = None;
        let changed = self.sender.send_if_modified(|current| {
            let reduced = reducer::reduce(current, action);
            let changed = !Arc::ptr_eq(current, &reduced);
            next = Some(Arc::clone(&reduced));
            *current = reduced;
            changed
        });
        if changed {
            tracing::debug!("state changed");
        } else {
            tracing::trace!("no-op action");
        }
        next.unwrap_or_else(|| self.state())
    }

    /// Subscribe to snapshot changes.
    ///
    /// The returned receiver considers the current snapshot already seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<HomeState>> {
        self.sender.subscribe()
    }
}
