//! # homeboard-app
//!
//! Application layer — the state container and the ways views reach it.
//!
//! ## Responsibilities
//! - [`reducer`]: the pure transition function `(snapshot, action) -> snapshot`
//! - [`store`]: [`HomeStore`](store::HomeStore), the stateful holder that
//!   serializes dispatches and notifies subscribers of new snapshots
//! - [`seed`]: the fixed initial state the dashboard starts from
//! - [`context`]: the access facade. A [`HomeProvider`](context::HomeProvider)
//!   owns the store for the lifetime of a session; views receive an
//!   injected [`HomeHandle`](context::HomeHandle) and fail loudly when
//!   used after (or outside) that scope
//! - [`dashboard`]: read-only selectors computing what the dashboard shows
//!
//! ## Dependency rule
//! Depends on `homeboard-domain` only (plus `tokio::sync` for the watch channel).

pub mod context;
pub mod dashboard;
pub mod reducer;
pub mod seed;
pub mod store;
