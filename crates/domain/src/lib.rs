//! # homeboard-domain
//!
//! Pure domain model for the homeboard smart-home dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (simulated lights, thermostats, locks, cameras, …)
//!   and the typed [`DevicePatch`](device::DevicePatch) used to update them
//! - Define **Rooms**, **Automation rules** and **Energy readings**
//! - Define the aggregate [`HomeState`](state::HomeState) snapshot and the
//!   closed set of [`Action`](action::Action)s that transform it
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or IO crates.

pub mod error;
pub mod id;
pub mod time;

pub mod action;
pub mod automation;
pub mod device;
pub mod energy;
pub mod room;
pub mod state;
