//! View layer for Gardenist.
//!
//! Four pure derivations sit under the shell:
//!
//! - [`filter`] - live search over the active catalog
//! - [`selection`] - resolving the selected id to its item
//! - [`dashboard`] - today / this-week task buckets and recent views
//! - [`router`] - per-module configuration
//!
//! [`layout`] combines them into the panels the shell shows, and
//! [`renderer`] turns those panels into text.

pub mod core;
pub mod dashboard;
pub mod filter;
pub mod layout;
pub mod renderer;
pub mod router;
pub mod selection;

pub use layout::{derive_calendar_day, derive_home_view, derive_module_view, HomeView, ModuleView};
