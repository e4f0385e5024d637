//! Access facade — how views reach the state container.
//!
//! A [`HomeProvider`] owns the [`HomeStore`] for the lifetime of a session;
//! its scope is active for as long as the provider is alive. Views never
//! look the store up globally. They are handed a [`HomeHandle`] and call
//! [`HomeHandle::current_context`] to obtain the live state together with a
//! [`Dispatcher`]. A handle that was never attached to a provider, or whose
//! provider has been dropped, yields [`ContextError::NoProvider`].

use std::sync::{Arc, Weak};

use homeboard_domain::action::Action;
use homeboard_domain::error::HomeboardError;
use homeboard_domain::state::HomeState;

use crate::store::HomeStore;

/// Programmer-usage error raised by the access facade.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("home context must be used within a home provider")]
    NoProvider,
}

/// Owner of the store; defines the active scope.
#[derive(Debug)]
pub struct HomeProvider {
    store: Arc<HomeStore>,
}

impl HomeProvider {
    #[must_use]
    pub fn new(store: HomeStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Provider over the [seed](crate::seed) state.
    ///
    /// # Errors
    ///
    /// Propagates a validation error from the seed records.
    pub fn seeded() -> Result<Self, HomeboardError> {
        Ok(Self::new(HomeStore::seeded()?))
    }

    /// Hand out a handle bound to this provider's scope.
    #[must_use]
    pub fn handle(&self) -> HomeHandle {
        HomeHandle {
            store: Arc::downgrade(&self.store),
        }
    }

    /// Direct access to the store, for the composition root.
    #[must_use]
    pub fn store(&self) -> &HomeStore {
        &self.store
    }
}

/// Injected access point for views. Cheap to clone.
///
/// Holds only a weak reference: a handle never keeps the scope alive.
#[derive(Debug, Clone, Default)]
pub struct HomeHandle {
    store: Weak<HomeStore>,
}

impl HomeHandle {
    /// A handle that belongs to no scope. Every access fails.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// The live `{state, dispatcher}` pair.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::NoProvider`] when no provider scope is active
    /// for this handle.
    pub fn current_context(&self) -> Result<HomeContext, ContextError> {
        let store = self.store.upgrade().ok_or(ContextError::NoProvider)?;
        Ok(HomeContext {
            state: store.state(),
            dispatcher: Dispatcher {
                store: self.store.clone(),
            },
        })
    }
}

/// What a view gets for one render: a snapshot and a way to submit actions.
#[derive(Debug, Clone)]
pub struct HomeContext {
    pub state: Arc<HomeState>,
    pub dispatcher: Dispatcher,
}

/// Submits actions to the store of the scope it was obtained from.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    store: Weak<HomeStore>,
}

impl Dispatcher {
    /// Apply `action` and return the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::NoProvider`] if the scope has ended since the
    /// context was obtained.
    pub fn dispatch(&self, action: Action) -> Result<Arc<HomeState>, ContextError> {
        let store = self.store.upgrade().ok_or(ContextError::NoProvider)?;
        Ok(store.dispatch(action))
    }
}
