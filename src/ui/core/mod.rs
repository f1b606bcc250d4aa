//! Core UI state for the Gardenist application.
//!
//! - [`actions`] - Action definitions for state transitions
//! - [`state`] - The explicit view state and its pure reducer
//! - [`context`] - Read-only application data shared by the derivations
//!
//! Derivations in [`crate::ui`] take a [`ViewState`] and an [`AppContext`] and
//! return fresh views. Nothing in here is global or mutable behind the scenes,
//! so every derivation can be recomputed on each update and tested on its own.

pub mod actions;
pub mod context;
pub mod state;

pub use actions::Action;
pub use context::AppContext;
pub use state::ViewState;
